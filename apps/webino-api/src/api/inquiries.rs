//! Wires the inquiries domain to the process's storage handle.

use axum::Router;
use domain_inquiries::{InquiryService, MongoInquiryRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoInquiryRepository::new(state.storage.handle().cloned());
    handlers::router(InquiryService::new(repository))
}
