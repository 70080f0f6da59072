//! Inquiry Service - submission workflow

use std::sync::Arc;
use tracing::instrument;

use crate::error::InquiryResult;
use crate::models::{Inquiry, InquiryPayload, InquirySubmitted};
use crate::repository::InquiryRepository;

/// Validates contact-form submissions and hands them to the repository
pub struct InquiryService<R: InquiryRepository> {
    repository: Arc<R>,
}

impl<R: InquiryRepository> InquiryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate `payload` and store it once.
    ///
    /// Invalid payloads never reach the repository.
    #[instrument(skip(self, payload), fields(service = ?payload.service))]
    pub async fn submit(&self, payload: InquiryPayload) -> InquiryResult<InquirySubmitted> {
        let inquiry = Inquiry::try_from(payload)?;
        let id = self.repository.insert(inquiry).await?;
        Ok(InquirySubmitted::success(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InquiryError;
    use crate::repository::MockInquiryRepository;
    use mockall::predicate::*;

    fn valid_payload() -> InquiryPayload {
        InquiryPayload {
            name: Some("Jo Smith".into()),
            email: Some("jo@example.com".into()),
            message: Some("Interested in a new website redesign.".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_stores_once_and_returns_id() {
        let mut mock_repo = MockInquiryRepository::new();
        mock_repo
            .expect_insert()
            .withf(|inquiry| inquiry.name == "Jo Smith" && inquiry.company.is_none())
            .times(1)
            .returning(|_| Ok("6650c2f1e4b0a1b2c3d4e5f6".to_string()));

        let service = InquiryService::new(mock_repo);
        let result = service.submit(valid_payload()).await.unwrap();

        assert_eq!(result, InquirySubmitted::success("6650c2f1e4b0a1b2c3d4e5f6"));
    }

    #[tokio::test]
    async fn test_submit_invalid_payload_never_stores() {
        let mut mock_repo = MockInquiryRepository::new();
        mock_repo.expect_insert().times(0);

        let service = InquiryService::new(mock_repo);
        let payload = InquiryPayload {
            name: Some("A".into()),
            email: Some("not-an-email".into()),
            message: Some("short".into()),
            ..Default::default()
        };

        let err = service.submit(payload).await.unwrap_err();
        match err {
            InquiryError::Validation(errors) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("name"));
                assert!(fields.contains_key("email"));
                assert!(fields.contains_key("message"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_propagates_storage_unavailable() {
        let mut mock_repo = MockInquiryRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| {
                Err(InquiryError::StorageUnavailable(
                    "Database not initialized".into(),
                ))
            });

        let service = InquiryService::new(mock_repo);
        let err = service.submit(valid_payload()).await.unwrap_err();

        assert!(matches!(err, InquiryError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_submit_propagates_write_failure() {
        let mut mock_repo = MockInquiryRepository::new();
        mock_repo
            .expect_insert()
            .with(always())
            .times(1)
            .returning(|_| Err(InquiryError::StorageWriteFailed("write concern error".into())));

        let service = InquiryService::new(mock_repo);
        let err = service.submit(valid_payload()).await.unwrap_err();

        assert!(matches!(
            err,
            InquiryError::StorageWriteFailed(msg) if msg == "write concern error"
        ));
    }
}
