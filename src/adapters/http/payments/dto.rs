//! JSON response types for payment endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::Payment;

/// Ledger entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub enrollment_id: i64,
    pub student_name: String,
    pub course_name: String,
    pub amount: Decimal,
    pub paid_at: Timestamp,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.get(),
            enrollment_id: payment.enrollment_id.get(),
            student_name: payment.student_name,
            course_name: payment.course_name,
            amount: payment.amount,
            paid_at: payment.paid_at,
        }
    }
}
