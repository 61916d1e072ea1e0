//! Line-oriented terminal I/O for the shell
//!
//! - Prompts are written without a newline and flushed
//! - One answer = one input line, line ending stripped
//! - End of input is reported as `None`, not as an error
//! - Bytes that are not UTF-8 are replaced, never rejected

use std::fmt::Display;
use std::io::{BufRead, Write};

use super::errors::CliResult;

/// Reads answers from `R` and writes prompts and output to `W`
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `label` and read one line.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Write one line of output
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Flush pending output
    pub fn flush(&mut self) -> CliResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Give back the output sink
    pub fn into_writer(self) -> W {
        self.writer
    }
}
