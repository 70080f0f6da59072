use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Unexpected document id: {0}")]
    UnexpectedId(String),
}

/// Build a client from a MongoConfig without touching the network.
///
/// The driver connects lazily and keeps reselecting servers, so a deployment
/// that is down at startup becomes usable as soon as it is reachable. Only a
/// malformed URL or invalid options fail here.
///
/// ```ignore
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "webino");
/// let client = client_from_config(&config).await?;
/// ```
pub async fn client_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    info!("MongoDB client configured for {}", config.redacted_url());
    Ok(client)
}

/// Lightweight round trip proving the deployment answers.
pub async fn verify_connection(client: &Client) -> Result<(), MongoError> {
    client
        .list_database_names()
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// [`verify_connection`] with exponential backoff.
///
/// Meant to run off the request path (e.g. in a spawned task at startup).
///
/// ```ignore
/// let client = client_from_config(&config).await?;
/// tokio::spawn(async move {
///     if let Err(e) = verify_connection_with_retry(&client, None).await {
///         tracing::warn!(error = %e, "MongoDB not reachable yet");
///     }
/// });
/// ```
pub async fn verify_connection_with_retry(
    client: &Client,
    retry_config: Option<RetryConfig>,
) -> Result<(), MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(move || verify_connection(client), policy).await,
        None => retry(move || verify_connection(client)).await,
    }
}
