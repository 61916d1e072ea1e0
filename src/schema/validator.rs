//! Field validation for student records
//!
//! Rules:
//! - name, id, major: non-empty strings
//! - age on creation: present, non-zero, non-negative
//! - age on update: non-negative (zero allowed)
//! - ages beyond u32 are out of range
//!
//! Checks run in field order and stop at the first failure. The validator
//! never touches the collection.

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::AgeInput;

const NAME_MESSAGE: &str = "name must be a non-empty string";
const ID_MESSAGE: &str = "student id must be a non-empty string";
const AGE_MESSAGE: &str = "age must be a non-negative number";
const MAJOR_MESSAGE: &str = "major must be a non-empty string";

/// Stateless validator for student fields
pub struct StudentValidator;

impl StudentValidator {
    /// Validates all fields of a record about to be created.
    ///
    /// Returns the age narrowed to its stored type.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` for the first field that fails, in the order
    /// name, id, age, major.
    pub fn validate_new(name: &str, id: &str, age: AgeInput, major: &str) -> SchemaResult<u32> {
        Self::validate_name(name)?;
        Self::validate_id(id)?;
        let age = Self::validate_new_age(age)?;
        Self::validate_major(major)?;
        Ok(age)
    }

    /// Validates a name
    pub fn validate_name(name: &str) -> SchemaResult<()> {
        require_text("name", name, NAME_MESSAGE)
    }

    /// Validates a student id used as a key
    pub fn validate_id(id: &str) -> SchemaResult<()> {
        require_text("id", id, ID_MESSAGE)
    }

    /// Validates a major
    pub fn validate_major(major: &str) -> SchemaResult<()> {
        require_text("major", major, MAJOR_MESSAGE)
    }

    /// Validates the age of a new record.
    ///
    /// Zero counts as missing here, so only positive ages pass.
    pub fn validate_new_age(age: AgeInput) -> SchemaResult<u32> {
        match age {
            AgeInput::NotANumber => Err(SchemaError::validation_failed(
                AGE_MESSAGE,
                ValidationDetails::not_a_number("age"),
            )),
            AgeInput::Number(n) if n <= 0 => Err(SchemaError::validation_failed(
                AGE_MESSAGE,
                ValidationDetails::out_of_range("age", "positive number", n),
            )),
            AgeInput::Number(n) => narrow_age(n),
        }
    }

    /// Validates a replacement age for an existing record.
    pub fn validate_updated_age(age: AgeInput) -> SchemaResult<u32> {
        match age {
            AgeInput::NotANumber => Err(SchemaError::validation_failed(
                AGE_MESSAGE,
                ValidationDetails::not_a_number("age"),
            )),
            AgeInput::Number(n) if n < 0 => Err(SchemaError::validation_failed(
                AGE_MESSAGE,
                ValidationDetails::out_of_range("age", "number >= 0", n),
            )),
            AgeInput::Number(n) => narrow_age(n),
        }
    }
}

fn require_text(field: &str, value: &str, message: &str) -> SchemaResult<()> {
    if value.is_empty() {
        return Err(SchemaError::validation_failed(
            message,
            ValidationDetails::empty_text(field),
        ));
    }
    Ok(())
}

fn narrow_age(n: i64) -> SchemaResult<u32> {
    u32::try_from(n).map_err(|_| {
        SchemaError::validation_failed(
            AGE_MESSAGE,
            ValidationDetails::out_of_range("age", format!("number <= {}", u32::MAX), n),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_pass() {
        let age = StudentValidator::validate_new("Alice", "S1", AgeInput::Number(20), "CS");
        assert_eq!(age, Ok(20));
    }

    #[test]
    fn test_empty_name_fails_first() {
        // id and major are also empty, but name is checked first
        let err = StudentValidator::validate_new("", "", AgeInput::NotANumber, "").unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.message(), NAME_MESSAGE);
    }

    #[test]
    fn test_empty_id_fails() {
        let err =
            StudentValidator::validate_new("Alice", "", AgeInput::Number(20), "CS").unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_age_checked_before_major() {
        let err =
            StudentValidator::validate_new("Alice", "S1", AgeInput::NotANumber, "").unwrap_err();
        assert_eq!(err.field(), "age");
        assert_eq!(err.details().actual, "not a number");
    }

    #[test]
    fn test_empty_major_fails() {
        let err =
            StudentValidator::validate_new("Alice", "S1", AgeInput::Number(20), "").unwrap_err();
        assert_eq!(err.field(), "major");
    }

    #[test]
    fn test_new_age_rejects_zero() {
        let err = StudentValidator::validate_new_age(AgeInput::Number(0)).unwrap_err();
        assert_eq!(err.field(), "age");
        assert_eq!(err.details().actual, "0");
    }

    #[test]
    fn test_new_age_rejects_negative() {
        assert!(StudentValidator::validate_new_age(AgeInput::Number(-1)).is_err());
    }

    #[test]
    fn test_updated_age_accepts_zero() {
        assert_eq!(StudentValidator::validate_updated_age(AgeInput::Number(0)), Ok(0));
    }

    #[test]
    fn test_updated_age_rejects_negative_and_nan() {
        assert!(StudentValidator::validate_updated_age(AgeInput::Number(-5)).is_err());
        assert!(StudentValidator::validate_updated_age(AgeInput::NotANumber).is_err());
    }

    #[test]
    fn test_age_beyond_u32_rejected() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(StudentValidator::validate_new_age(AgeInput::Number(too_big)).is_err());
        assert!(StudentValidator::validate_updated_age(AgeInput::Number(too_big)).is_err());
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(StudentValidator::validate_name(" ").is_ok());
    }
}
