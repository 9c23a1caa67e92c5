//! JSON request/response types for student endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::Student;

/// Body for creating or updating a student.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    pub last_name: String,
    pub age: u8,
}

/// Student as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub age: u8,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.get(),
            name: student.name,
            last_name: student.last_name,
            age: student.age,
        }
    }
}
