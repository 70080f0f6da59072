//! Database library providing the MongoDB connector and storage helpers
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "webino");
//! let client = mongodb::client_from_config(&config).await?;
//! let db = client.database(config.database());
//!
//! let id = mongodb::insert_document(&db, "inquiry", &payload).await?;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::RetryConfig;
