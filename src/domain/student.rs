//! Student entity.
//!
//! The registry only serves adult education, so a student below 18 is
//! rejected at construction. Validation lives in [`NewStudent`] so both
//! registration and update go through the same checks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StudentId, ValidationError};

/// Validated draft of a student, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub last_name: String,
    pub age: u8,
}

impl NewStudent {
    /// Validates the raw fields and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a name component is blank or the
    /// student is under 18.
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let last_name = last_name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if last_name.trim().is_empty() {
            return Err(ValidationError::empty_field("last_name"));
        }
        if age < 18 {
            return Err(ValidationError::Underage { actual: age });
        }

        Ok(Self { name, last_name, age })
    }
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identity.
    pub id: StudentId,

    pub name: String,
    pub last_name: String,
    pub age: u8,

    /// Record version, bumped by the store on every committed update.
    pub version: u64,
}

impl Student {
    /// Materializes a draft under a freshly assigned identity.
    pub fn from_draft(id: StudentId, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            last_name: draft.last_name,
            age: draft.age,
            version: 1,
        }
    }

    /// Replaces the mutable details, keeping identity and version.
    pub fn apply(&mut self, draft: NewStudent) {
        self.name = draft.name;
        self.last_name = draft.last_name;
        self.age = draft.age;
    }

    /// "First Last", as shown on payment receipts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_an_adult_student() {
        let draft = NewStudent::new("Ana", "Souza", 20).unwrap();
        assert_eq!(draft.age, 20);
    }

    #[test]
    fn accepts_exactly_eighteen() {
        assert!(NewStudent::new("Ana", "Souza", 18).is_ok());
    }

    #[test]
    fn rejects_a_minor() {
        let err = NewStudent::new("Ana", "Souza", 17).unwrap_err();
        assert_eq!(err, ValidationError::Underage { actual: 17 });
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            NewStudent::new("  ", "Souza", 20).unwrap_err(),
            ValidationError::empty_field("name")
        );
        assert_eq!(
            NewStudent::new("Ana", "", 20).unwrap_err(),
            ValidationError::empty_field("last_name")
        );
    }

    #[test]
    fn full_name_joins_both_components() {
        let student = Student::from_draft(
            StudentId::new(1),
            NewStudent::new("Ana", "Souza", 20).unwrap(),
        );
        assert_eq!(student.full_name(), "Ana Souza");
        assert_eq!(student.version, 1);
    }

    #[test]
    fn apply_keeps_identity_and_version() {
        let mut student = Student::from_draft(
            StudentId::new(4),
            NewStudent::new("Ana", "Souza", 20).unwrap(),
        );
        student.apply(NewStudent::new("Ana", "Lima", 21).unwrap());

        assert_eq!(student.id, StudentId::new(4));
        assert_eq!(student.last_name, "Lima");
        assert_eq!(student.version, 1);
    }
}
