//! Payment recorder handlers.
//!
//! This module is the only place that settles enrollment fees: the shared
//! [`record_fee_payment`] step flips the paid flag and appends the ledger
//! entry in the same session.

mod list_payments;
mod record_payment;

pub use list_payments::{PaymentsForEnrollmentHandler, PaymentsForEnrollmentQuery};
pub use record_payment::{record_fee_payment, RecordPaymentCommand, RecordPaymentHandler};
