//! Course entity.
//!
//! A course carries the registration fee charged on enrollment and the date
//! window during which it runs. Fees use [`rust_decimal::Decimal`] so amounts
//! survive arithmetic without float drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, Timestamp, ValidationError};

/// Validated draft of a course, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

impl NewCourse {
    /// Validates the raw fields and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the name is blank, the fee is
    /// negative, or the window ends before it starts.
    pub fn new(
        name: impl Into<String>,
        registration_fee: Decimal,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if registration_fee.is_sign_negative() {
            return Err(ValidationError::NegativeFee { actual: registration_fee });
        }
        if end_date.is_before(&start_date) {
            return Err(ValidationError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            name,
            registration_fee,
            start_date,
            end_date,
        })
    }
}

/// A course offered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identity.
    pub id: CourseId,

    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,

    /// Record version, bumped by the store on every committed update.
    pub version: u64,
}

impl Course {
    /// Materializes a draft under a freshly assigned identity.
    pub fn from_draft(id: CourseId, draft: NewCourse) -> Self {
        Self {
            id,
            name: draft.name,
            registration_fee: draft.registration_fee,
            start_date: draft.start_date,
            end_date: draft.end_date,
            version: 1,
        }
    }

    /// Replaces the mutable details, keeping identity and version.
    pub fn apply(&mut self, draft: NewCourse) {
        self.name = draft.name;
        self.registration_fee = draft.registration_fee;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
    }

    /// True when `at` falls inside the course window, bounds included.
    pub fn is_active(&self, at: Timestamp) -> bool {
        !at.is_before(&self.start_date) && !at.is_after(&self.end_date)
    }
}
