//! Shared application state.

use database::mongodb::{Client, client_from_config, verify_connection_with_retry};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::diagnostics::StorageBackend;

/// Cloned into every router that needs it; `Database` clones share one pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: StorageBackend,
}

/// Build the MongoDB client when storage is enabled.
///
/// Never waits on the network: the client connects lazily, and reachability is
/// checked in the background so an outage at startup only produces warnings.
pub async fn connect_storage(config: &Config) -> (StorageBackend, Option<Client>) {
    let Some(mongodb) = &config.mongodb else {
        warn!("DATABASE_URL/DATABASE_NAME not set, storage disabled");
        return (StorageBackend::Missing, None);
    };

    let client = match client_from_config(mongodb).await {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Invalid MongoDB configuration, continuing without storage");
            return (StorageBackend::Uninitialized, None);
        }
    };

    let database = mongodb.database().to_string();
    let background = client.clone();
    tokio::spawn(async move {
        match verify_connection_with_retry(&background, None).await {
            Ok(()) => info!("Successfully connected to MongoDB database: {}", database),
            Err(e) => warn!(
                error = %e,
                "MongoDB not reachable yet; the driver keeps retrying per request"
            ),
        }
    });

    let db = client.database(mongodb.database());
    (StorageBackend::Ready(db), Some(client))
}
