//! Storage diagnostics behind `GET /test`.
//!
//! The report never fails: every storage problem is captured as text in the
//! `database` field.

use async_trait::async_trait;
use core_config::env_is_set;
use database::mongodb::{
    DATABASE_NAME_VAR, DATABASE_URL_VAR, Database, MongoError, list_collection_names,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

pub const MAX_LISTED_COLLECTIONS: usize = 10;
pub const MAX_ERROR_CHARS: usize = 50;

const BACKEND_RUNNING: &str = "✅ Running";
const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
const MODULE_MISSING: &str = "❌ Database module not found (run enable-database first)";
const NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
const CONNECTED_AND_WORKING: &str = "✅ Connected & Working";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";
const VAR_SET: &str = "✅ Set";
const VAR_NOT_SET: &str = "❌ Not Set";

/// Anything that can list collection names of a live store.
#[async_trait]
pub trait CollectionLister: Send + Sync {
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, String>;
}

#[async_trait]
impl CollectionLister for Database {
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, String> {
        list_collection_names(self, limit).await.map_err(|e| match e {
            MongoError::Mongo(inner) => inner.to_string(),
            other => other.to_string(),
        })
    }
}

/// What the process knows about its storage
#[derive(Clone, Debug)]
pub enum StorageBackend<P = Database> {
    /// Storage was not enabled for this process
    Missing,
    /// Enabled, but no client could be built from the configured URL
    Uninitialized,
    Ready(P),
}

impl<P> StorageBackend<P> {
    pub fn handle(&self) -> Option<&P> {
        match self {
            StorageBackend::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` is set; the value is never echoed
    #[schema(example = "✅ Set")]
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set; the value is never echoed
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: VAR_NOT_SET.to_string(),
            database_name: VAR_NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

#[instrument(skip(storage))]
pub async fn run_diagnostics<P: CollectionLister>(
    storage: &StorageBackend<P>,
) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::default();

    match storage {
        StorageBackend::Missing => report.database = MODULE_MISSING.to_string(),
        StorageBackend::Uninitialized => report.database = NOT_INITIALIZED.to_string(),
        StorageBackend::Ready(lister) => {
            report.connection_status = CONNECTED.to_string();

            match lister.collection_names(MAX_LISTED_COLLECTIONS).await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    report.collections = names;
                    report.database = CONNECTED_AND_WORKING.to_string();
                }
                Err(cause) => {
                    warn!(error = %cause, "Collection listing failed");
                    report.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&cause, MAX_ERROR_CHARS)
                    );
                }
            }
        }
    }

    report.database_url = env_presence(DATABASE_URL_VAR).to_string();
    report.database_name = env_presence(DATABASE_NAME_VAR).to_string();
    report
}

fn env_presence(key: &str) -> &'static str {
    if env_is_set(key) { VAR_SET } else { VAR_NOT_SET }
}

/// First `max` characters of `s`, never splitting a character
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Lister returning a canned result
    #[derive(Clone)]
    pub(crate) struct FixedCollections(pub Result<Vec<String>, String>);

    #[async_trait]
    impl CollectionLister for FixedCollections {
        async fn collection_names(&self, _limit: usize) -> Result<Vec<String>, String> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_missing_module() {
        let report = run_diagnostics::<FixedCollections>(&StorageBackend::Missing).await;
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(
            report.database,
            "❌ Database module not found (run enable-database first)"
        );
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_uninitialized_handle() {
        let report = run_diagnostics::<FixedCollections>(&StorageBackend::Uninitialized).await;
        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
    }

    #[tokio::test]
    async fn test_connected_lists_at_most_ten_collections() {
        let names: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
        let storage = StorageBackend::Ready(FixedCollections(Ok(names)));

        let report = run_diagnostics(&storage).await;
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[0], "c0");
    }

    #[tokio::test]
    async fn test_listing_error_is_truncated() {
        let cause = "x".repeat(80);
        let storage = StorageBackend::Ready(FixedCollections(Err(cause)));

        let report = run_diagnostics(&storage).await;
        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", "x".repeat(50))
        );
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }

    #[test]
    fn test_env_presence_never_echoes_values() {
        temp_env::with_vars(
            [
                (DATABASE_URL_VAR, Some("mongodb://user:secret@db:27017")),
                (DATABASE_NAME_VAR, None::<&str>),
            ],
            || {
                let report = tokio::runtime::Builder::new_current_thread()
                    .build()
                    .unwrap()
                    .block_on(run_diagnostics::<FixedCollections>(&StorageBackend::Missing));
                assert_eq!(report.database_url, "✅ Set");
                assert_eq!(report.database_name, "❌ Not Set");
                assert!(!serde_json::to_string(&report).unwrap().contains("secret"));
            },
        );
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("", 5), "");
    }
}
