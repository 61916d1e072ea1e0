//! Interactive menu loop
//!
//! One blocking read at a time: show the menu, read a choice, prompt for
//! the fields that choice needs, call the handler once, print the result,
//! repeat. End of input anywhere behaves like choosing exit.

use std::io::{BufRead, Write};

use crate::api::{OperationResult, RosterHandler};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::schema::AgeInput;

use super::errors::CliResult;
use super::io::Prompter;

pub const BANNER: &str = "Welcome to the student roster!";
pub const FAREWELL: &str = "Thank you for using the student roster. Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const NO_STUDENTS: &str = "No students on record.";

const MENU: &[&str] = &[
    "",
    "=== Student Roster ===",
    "1. Add student",
    "2. Query student",
    "3. Update student",
    "4. Delete student",
    "5. List all students",
    "0. Exit",
    "======================",
];
const CHOICE_PROMPT: &str = "Choose an option (0-5): ";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Add,
    Query,
    Update,
    Delete,
    List,
}

impl MenuChoice {
    /// Parse a menu answer. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuChoice::Exit),
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Query),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::List),
            _ => None,
        }
    }
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    InputClosed,
}

/// Interactive shell over any line reader and writer
pub struct Shell<R, W> {
    handler: RosterHandler,
    io: Prompter<R, W>,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(handler: RosterHandler, io: Prompter<R, W>, show_banner: bool) -> Self {
        Self {
            handler,
            io,
            show_banner,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        log_event(Event::SessionStart);

        if self.show_banner {
            self.io.say(BANNER)?;
        }

        loop {
            self.show_menu()?;
            let Some(answer) = self.io.prompt(CHOICE_PROMPT)? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Add) => self.add_student()?,
                Some(MenuChoice::Query) => self.query_student()?,
                Some(MenuChoice::Update) => self.update_student()?,
                Some(MenuChoice::Delete) => self.delete_student()?,
                Some(MenuChoice::List) => self.list_students()?,
                None => {
                    log_event_with_fields(Event::InvalidMenuChoice, &[("input", answer.trim())]);
                    self.io.say(INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::InputClosed {
                break;
            }
        }

        self.io.say(FAREWELL)?;
        self.io.flush()?;

        let fields = self.handler.metrics().as_fields();
        let field_refs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        log_event_with_fields(Event::SessionEnd, &field_refs);

        Ok(())
    }

    /// The handler, for inspecting state after a session
    pub fn handler(&self) -> &RosterHandler {
        &self.handler
    }

    /// Give back the prompter, e.g. to read captured output
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.io
    }

    fn show_menu(&mut self) -> CliResult<()> {
        for line in MENU {
            self.io.say(line)?;
        }
        Ok(())
    }

    fn add_student(&mut self) -> CliResult<Flow> {
        self.io.say("\n=== Add student ===")?;

        let Some(name) = self.io.prompt("Enter name: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(id) = self.io.prompt("Enter student id: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(age) = self.io.prompt("Enter age: ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(major) = self.io.prompt("Enter major: ")? else {
            return Ok(Flow::InputClosed);
        };

        let result = self.handler.add(&name, &id, AgeInput::parse(&age), &major);
        self.io.say(&result.message)?;
        if let Some(student) = &result.student {
            self.io.say(format!("Added: {}", student))?;
        }

        Ok(Flow::Continue)
    }

    fn query_student(&mut self) -> CliResult<Flow> {
        self.io.say("\n=== Query student ===")?;

        let Some(id) = self.io.prompt("Enter the student id to look up: ")? else {
            return Ok(Flow::InputClosed);
        };

        let result = self.handler.query(&id);
        match &result.student {
            Some(student) => self.io.say(format!("Found: {}", student))?,
            None => self.io.say(format!("Query failed: {}", result.message))?,
        }

        Ok(Flow::Continue)
    }

    fn update_student(&mut self) -> CliResult<Flow> {
        self.io.say("\n=== Update student ===")?;

        let Some(id) = self.io.prompt("Enter the student id to update: ")? else {
            return Ok(Flow::InputClosed);
        };

        // Read the store directly so the lookup is not counted as a query
        match self.handler.store().query_by_id(&id) {
            Ok(student) => self.io.say(format!("Current record: {}", student))?,
            Err(e) => {
                self.io.say(e)?;
                return Ok(Flow::Continue);
            }
        }

        let Some(age) = self.io.prompt("Enter new age (leave blank to keep): ")? else {
            return Ok(Flow::InputClosed);
        };
        let Some(major) = self.io.prompt("Enter new major (leave blank to keep): ")? else {
            return Ok(Flow::InputClosed);
        };

        let age = blank_to_none(&age).map(AgeInput::parse);
        let major = blank_to_none(&major);

        let result = self.handler.update(&id, age, major);
        self.report("Update result", &result)?;
        if let Some(student) = &result.student {
            self.io.say(format!("Updated record: {}", student))?;
        }

        Ok(Flow::Continue)
    }

    fn delete_student(&mut self) -> CliResult<Flow> {
        self.io.say("\n=== Delete student ===")?;

        let Some(id) = self.io.prompt("Enter the student id to delete: ")? else {
            return Ok(Flow::InputClosed);
        };

        let result = self.handler.delete(&id);
        self.report("Delete result", &result)?;

        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> CliResult<Flow> {
        self.io.say("\n=== All students ===")?;

        let lines: Vec<String> = self
            .handler
            .list()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {} ({}) - age {}, {}", i + 1, s.name, s.id, s.age, s.major))
            .collect();

        if lines.is_empty() {
            self.io.say(NO_STUDENTS)?;
        } else {
            self.io.say(format!("{} student(s) on record", lines.len()))?;
            for line in lines {
                self.io.say(line)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn report(&mut self, label: &str, result: &OperationResult) -> CliResult<()> {
        self.io.say(format!("{}: {}", label, result.message))
    }
}

/// Trimmed text, or `None` if nothing but whitespace was entered
fn blank_to_none(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
