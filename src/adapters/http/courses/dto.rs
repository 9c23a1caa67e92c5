//! JSON request/response types for course endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::Course;

/// Body for creating or updating a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl CourseRequest {
    pub fn start(&self) -> Timestamp {
        Timestamp::from_datetime(self.start_date)
    }

    pub fn end(&self) -> Timestamp {
        Timestamp::from_datetime(self.end_date)
    }
}

/// Course as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.get(),
            name: course.name,
            registration_fee: course.registration_fee,
            start_date: course.start_date,
            end_date: course.end_date,
        }
    }
}
