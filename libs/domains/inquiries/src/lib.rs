//! Inquiries Domain
//!
//! Contact-form submissions: validation, persistence, and the HTTP endpoint.
//!
//! ```text
//! handlers  →  service  →  repository (trait)  →  mongodb
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inquiries::{InquiryService, MongoInquiryRepository, handlers};
//!
//! // `None` when storage is not configured; submissions then fail with 500
//! let repository = MongoInquiryRepository::new(None);
//! let router = handlers::router(InquiryService::new(repository));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{InquiryError, InquiryResult};
pub use handlers::ApiDoc;
pub use models::{INQUIRY_COLLECTION, Inquiry, InquiryForm, InquiryPayload, InquirySubmitted};
pub use crate::mongodb::MongoInquiryRepository;
pub use repository::InquiryRepository;
pub use service::InquiryService;
