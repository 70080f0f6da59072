use async_trait::async_trait;

use crate::error::InquiryResult;
use crate::models::Inquiry;

/// Persistence seam for inquiries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Store a validated inquiry and return the identifier the store assigned
    async fn insert(&self, inquiry: Inquiry) -> InquiryResult<String>;
}
