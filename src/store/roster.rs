//! In-memory student roster
//!
//! Records are kept in insertion order and looked up by linear scan.
//! Every operation validates its input first and only then touches the
//! collection, so a returned error always means nothing changed.

use crate::schema::{AgeInput, Student, StudentValidator};

use super::errors::{StoreError, StoreResult};

/// Order-preserving collection of student records keyed by id.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new student.
    ///
    /// Flow:
    /// 1. Validate name, id, age, major (in that order)
    /// 2. Reject a duplicate id
    /// 3. Append
    pub fn add(
        &mut self,
        name: &str,
        id: &str,
        age: AgeInput,
        major: &str,
    ) -> StoreResult<Student> {
        let age = StudentValidator::validate_new(name, id, age, major)?;

        if self.position(id).is_some() {
            return Err(StoreError::duplicate_key(id));
        }

        let student = Student::new(name, id, age, major);
        self.students.push(student.clone());
        Ok(student)
    }

    /// Returns a copy of the student with this id.
    pub fn query_by_id(&self, id: &str) -> StoreResult<Student> {
        StudentValidator::validate_id(id)?;

        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Changes age and/or major of an existing student.
    ///
    /// All supplied fields are validated before any is written; on error
    /// the record keeps its previous values.
    pub fn update_by_id(
        &mut self,
        id: &str,
        age: Option<AgeInput>,
        major: Option<&str>,
    ) -> StoreResult<Student> {
        StudentValidator::validate_id(id)?;

        let index = self.position(id).ok_or_else(|| StoreError::not_found(id))?;

        let age = age.map(StudentValidator::validate_updated_age).transpose()?;
        if let Some(major) = major {
            StudentValidator::validate_major(major)?;
        }

        let student = &mut self.students[index];
        if let Some(age) = age {
            student.age = age;
        }
        if let Some(major) = major {
            student.major = major.to_string();
        }

        Ok(student.clone())
    }

    /// Removes the student with this id.
    pub fn delete_by_id(&mut self, id: &str) -> StoreResult<()> {
        StudentValidator::validate_id(id)?;

        let index = self.position(id).ok_or_else(|| StoreError::not_found(id))?;
        self.students.remove(index);
        Ok(())
    }

    /// All students in insertion order
    pub fn list_all(&self) -> &[Student] {
        &self.students
    }

    /// Number of students on record
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_alice() -> RecordStore {
        let mut store = RecordStore::new();
        store.add("Alice", "S1", AgeInput::Number(20), "CS").unwrap();
        store
    }

    #[test]
    fn test_add_returns_record() {
        let mut store = RecordStore::new();
        let student = store.add("Alice", "S1", AgeInput::Number(20), "CS").unwrap();

        assert_eq!(student, Student::new("Alice", "S1", 20, "CS"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = store_with_alice();

        let err = store.add("Bob", "S1", AgeInput::Number(22), "Math").unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(store.list_all(), &[Student::new("Alice", "S1", 20, "CS")]);
    }

    #[test]
    fn test_add_validation_before_duplicate_check() {
        let mut store = store_with_alice();

        let err = store.add("Bob", "S1", AgeInput::NotANumber, "Math").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_invalid_does_not_mutate() {
        let mut store = RecordStore::new();
        assert!(store.add("Alice", "S1", AgeInput::Number(0), "CS").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_is_case_sensitive() {
        let store = store_with_alice();
        assert!(store.query_by_id("S1").is_ok());
        assert!(store.query_by_id("s1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_query_empty_id_is_validation_error() {
        let store = store_with_alice();
        assert!(store.query_by_id("").unwrap_err().is_validation());
    }

    #[test]
    fn test_update_age_only() {
        let mut store = store_with_alice();
        let updated = store.update_by_id("S1", Some(AgeInput::Number(21)), None).unwrap();
        assert_eq!(updated, Student::new("Alice", "S1", 21, "CS"));
    }

    #[test]
    fn test_update_major_only() {
        let mut store = store_with_alice();
        let updated = store.update_by_id("S1", None, Some("Physics")).unwrap();
        assert_eq!(updated.major, "Physics");
        assert_eq!(updated.age, 20);
    }

    #[test]
    fn test_update_nothing_supplied_is_ok() {
        let mut store = store_with_alice();
        let updated = store.update_by_id("S1", None, None).unwrap();
        assert_eq!(updated, Student::new("Alice", "S1", 20, "CS"));
    }

    #[test]
    fn test_update_is_atomic_on_bad_age() {
        let mut store = store_with_alice();
        let err = store
            .update_by_id("S1", Some(AgeInput::Number(-1)), Some("Math"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.query_by_id("S1").unwrap(), Student::new("Alice", "S1", 20, "CS"));
    }

    #[test]
    fn test_update_is_atomic_on_bad_major() {
        let mut store = store_with_alice();
        let err = store.update_by_id("S1", Some(AgeInput::Number(30)), Some("")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.query_by_id("S1").unwrap().age, 20);
    }

    #[test]
    fn test_update_allows_zero_age() {
        let mut store = store_with_alice();
        assert_eq!(store.update_by_id("S1", Some(AgeInput::Number(0)), None).unwrap().age, 0);
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = store_with_alice();
        assert!(store
            .update_by_id("S2", Some(AgeInput::Number(21)), None)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_twice() {
        let mut store = store_with_alice();
        assert!(store.delete_by_id("S1").is_ok());
        assert!(store.delete_by_id("S1").unwrap_err().is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = RecordStore::new();
        store.add("Carol", "S3", AgeInput::Number(19), "Art").unwrap();
        store.add("Alice", "S1", AgeInput::Number(20), "CS").unwrap();
        store.add("Bob", "S2", AgeInput::Number(22), "Math").unwrap();
        store.delete_by_id("S1").unwrap();

        let ids: Vec<&str> = store.list_all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S3", "S2"]);
    }
}
