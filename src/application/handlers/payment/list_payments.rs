//! PaymentsForEnrollmentHandler - Query handler for an enrollment's ledger.

use std::sync::Arc;

use crate::domain::foundation::{EnrollmentId, EntityKind, RegistryError};
use crate::domain::Payment;
use crate::ports::EntityStore;

/// Query for the payment history of one enrollment.
#[derive(Debug, Clone, Copy)]
pub struct PaymentsForEnrollmentQuery {
    pub enrollment_id: EnrollmentId,
}

/// Handler returning the ledger entries recorded against an enrollment.
pub struct PaymentsForEnrollmentHandler {
    store: Arc<dyn EntityStore>,
}

impl PaymentsForEnrollmentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: PaymentsForEnrollmentQuery,
    ) -> Result<Vec<Payment>, RegistryError> {
        let session = self.store.session().await?;

        if session.find_enrollment(query.enrollment_id).await?.is_none() {
            return Err(RegistryError::not_found(
                EntityKind::Enrollment,
                query.enrollment_id.get(),
            ));
        }

        Ok(session.payments_for_enrollment(query.enrollment_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::application::handlers::payment::{RecordPaymentCommand, RecordPaymentHandler};
    use crate::domain::foundation::Timestamp;
    use crate::domain::{NewCourse, NewEnrollment, NewStudent};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn returns_the_ledger_for_a_paid_enrollment() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        let enrollment = session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.commit().await.unwrap();

        RecordPaymentHandler::new(store.clone())
            .handle(RecordPaymentCommand {
                enrollment_id: enrollment.id,
            })
            .await
            .unwrap();

        let payments = PaymentsForEnrollmentHandler::new(store)
            .handle(PaymentsForEnrollmentQuery {
                enrollment_id: enrollment.id,
            })
            .await
            .unwrap();

        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, dec!(150.00));
    }

    #[tokio::test]
    async fn missing_enrollment_is_not_found() {
        let store = Arc::new(InMemoryEntityStore::new());

        let err = PaymentsForEnrollmentHandler::new(store)
            .handle(PaymentsForEnrollmentQuery {
                enrollment_id: EnrollmentId::new(4),
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Enrollment, 4));
    }
}
