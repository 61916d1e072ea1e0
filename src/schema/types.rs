//! Student record and raw field input types
//!
//! Fields:
//! - name: non-empty string, immutable after creation
//! - id: non-empty string, unique key, immutable after creation
//! - age: positive integer on creation, mutable
//! - major: non-empty string, mutable

use serde::Serialize;
use std::fmt;

/// One student's stored data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub age: u32,
    pub major: String,
}

impl Student {
    /// Create a new record. Callers are expected to have validated the fields.
    pub(crate) fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        age: u32,
        major: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            age,
            major: major.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, id: {}, age: {}, major: {}",
            self.name, self.id, self.age, self.major
        )
    }
}

/// Age as typed at a prompt, before validation.
///
/// Anything that does not start with an integer is `NotANumber`; the
/// validator decides whether that is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeInput {
    Number(i64),
    NotANumber,
}

impl AgeInput {
    /// Parse prompt text with integer-prefix semantics.
    ///
    /// Leading and trailing whitespace is ignored and an optional sign is
    /// accepted. Trailing garbage after the digits is dropped, so `"20y"`
    /// reads as 20.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits_len == 0 {
            return AgeInput::NotANumber;
        }

        match rest[..digits_len].parse::<i64>() {
            Ok(n) if negative => AgeInput::Number(-n),
            Ok(n) => AgeInput::Number(n),
            // Longer than i64; saturate so range checks still reject it
            Err(_) if negative => AgeInput::Number(i64::MIN),
            Err(_) => AgeInput::Number(i64::MAX),
        }
    }
}

impl From<i64> for AgeInput {
    fn from(n: i64) -> Self {
        AgeInput::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(AgeInput::parse("20"), AgeInput::Number(20));
        assert_eq!(AgeInput::parse("  21 \n"), AgeInput::Number(21));
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(AgeInput::parse("-4"), AgeInput::Number(-4));
        assert_eq!(AgeInput::parse("+7"), AgeInput::Number(7));
    }

    #[test]
    fn test_parse_integer_prefix() {
        assert_eq!(AgeInput::parse("20years"), AgeInput::Number(20));
        assert_eq!(AgeInput::parse("3.9"), AgeInput::Number(3));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(AgeInput::parse("abc"), AgeInput::NotANumber);
        assert_eq!(AgeInput::parse(""), AgeInput::NotANumber);
        assert_eq!(AgeInput::parse("-"), AgeInput::NotANumber);
    }

    #[test]
    fn test_parse_overflow_saturates() {
        assert_eq!(
            AgeInput::parse("99999999999999999999999"),
            AgeInput::Number(i64::MAX)
        );
    }

    #[test]
    fn test_student_display() {
        let s = Student::new("Alice", "S1", 20, "CS");
        assert_eq!(s.to_string(), "name: Alice, id: S1, age: 20, major: CS");
    }

    #[test]
    fn test_student_serializes_all_fields() {
        let s = Student::new("Alice", "S1", 20, "CS");
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["id"], "S1");
        assert_eq!(value["age"], 20);
        assert_eq!(value["major"], "CS");
    }
}
