use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{InternalServerErrorResponse, UnprocessableValidationResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InquiryResult;
use crate::models::{InquiryForm, InquiryPayload, InquirySubmitted};
use crate::repository::InquiryRepository;
use crate::service::InquiryService;

/// OpenAPI documentation for the Inquiries API
#[derive(OpenApi)]
#[openapi(
    paths(submit_inquiry),
    components(
        schemas(InquiryPayload, InquirySubmitted),
        responses(UnprocessableValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Inquiries", description = "Contact-form submissions")
    )
)]
pub struct ApiDoc;

/// Create the inquiries router
pub fn router<R: InquiryRepository + 'static>(service: InquiryService<R>) -> Router {
    Router::new()
        .route("/", post(submit_inquiry))
        .with_state(Arc::new(service))
}

/// Submit a contact-form inquiry
#[utoipa::path(
    post,
    path = "",
    tag = "Inquiries",
    request_body = InquiryPayload,
    responses(
        (status = 200, description = "Inquiry stored", body = InquirySubmitted),
        (status = 422, response = UnprocessableValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_inquiry<R: InquiryRepository>(
    State(service): State<Arc<InquiryService<R>>>,
    ValidatedJson(form): ValidatedJson<InquiryForm>,
) -> InquiryResult<Json<InquirySubmitted>> {
    let submitted = service.submit(form.into_payload()).await?;
    Ok(Json(submitted))
}
