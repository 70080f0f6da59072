use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use crate::diagnostics::{CollectionLister, DiagnosticsReport, StorageBackend, run_diagnostics};

pub fn router<P: CollectionLister + 'static>(storage: StorageBackend<P>) -> Router {
    Router::new()
        .route("/test", get(test_storage::<P>))
        .with_state(Arc::new(storage))
}

/// Report backend and storage reachability. Always 200.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses((status = 200, description = "Diagnostics report", body = DiagnosticsReport))
)]
pub async fn test_storage<P: CollectionLister>(
    State(storage): State<Arc<StorageBackend<P>>>,
) -> Json<DiagnosticsReport> {
    Json(run_diagnostics(&*storage).await)
}
