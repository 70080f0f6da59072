//! HTTP routes.

pub mod diagnostics;
pub mod inquiries;
pub mod site;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Routes nested under `/api` by `axum_helpers::create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(site::router())
        .nest("/services", domain_catalog::handlers::router())
        .nest("/inquiries", inquiries::router(state))
}

/// Top-level routes: status page, diagnostics and liveness
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(site::root_router())
        .merge(diagnostics::router(state.storage.clone()))
        .merge(health_router(state.config.app))
}
