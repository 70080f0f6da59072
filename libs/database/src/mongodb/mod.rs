//! MongoDB database connector and utilities
//!
//! Provides connection management and the document helpers used by domain repositories.

mod config;
mod connector;
mod documents;

pub use config::{DATABASE_NAME_VAR, DATABASE_URL_VAR, MongoConfig};
pub use connector::{
    MongoError, client_from_config, verify_connection, verify_connection_with_retry,
};
pub use documents::{insert_document, list_collection_names};

// Re-export MongoDB types for convenience
pub use ::mongodb::{Client, Database};
