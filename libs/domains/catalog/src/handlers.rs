use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::models::{ServiceOffering, list_services};

/// OpenAPI documentation for the service catalog
#[derive(OpenApi)]
#[openapi(
    paths(get_services),
    components(schemas(ServiceOffering)),
    tags(
        (name = "Services", description = "Service catalog")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router {
    Router::new().route("/", get(get_services))
}

/// List the offered services
#[utoipa::path(
    get,
    path = "",
    tag = "Services",
    responses(
        (
            status = 200,
            description = "Service catalog in display order",
            body = Vec<ServiceOffering>
        )
    )
)]
async fn get_services() -> Json<Vec<ServiceOffering>> {
    tracing::debug!("Serving service catalog");
    Json(list_services())
}
