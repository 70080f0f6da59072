//! Status and greeting endpoints

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ROOT_MESSAGE: &str = "Webino Solutions API is running";
pub const HELLO_MESSAGE: &str = "Hello from Webino Solutions backend!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// `GET /`
pub fn root_router() -> Router {
    Router::new().route("/", get(root_status))
}

/// `GET /hello`, nested under `/api`
pub fn router() -> Router {
    Router::new().route("/hello", get(hello))
}

/// Service status
#[utoipa::path(
    get,
    path = "/",
    tag = "Site",
    responses((status = 200, description = "API is running", body = MessageResponse))
)]
pub async fn root_status() -> Json<MessageResponse> {
    MessageResponse::new(ROOT_MESSAGE)
}

/// Greeting for the frontend
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Site",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    MessageResponse::new(HELLO_MESSAGE)
}
