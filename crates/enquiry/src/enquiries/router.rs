use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{EnquiryId, EnquirySubmission};
use super::repository::{EnquiryRepository, RepositoryError};
use super::service::{EnquiryService, EnquiryServiceError};

/// Router builder exposing the enquiry CRUD endpoints.
pub fn enquiry_router<R>(service: Arc<EnquiryService<R>>) -> Router
where
    R: EnquiryRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/enquiries",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/enquiries/:enquiry_id",
            get(detail_handler::<R>)
                .put(revise_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<EnquiryService<R>>>,
    axum::Json(submission): axum::Json<EnquirySubmission>,
) -> Response
where
    R: EnquiryRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.detail_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<EnquiryService<R>>>,
) -> Response
where
    R: EnquiryRepository + 'static,
{
    match service.list() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<EnquiryService<R>>>,
    Path(enquiry_id): Path<String>,
) -> Response
where
    R: EnquiryRepository + 'static,
{
    let id = EnquiryId(enquiry_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn revise_handler<R>(
    State(service): State<Arc<EnquiryService<R>>>,
    Path(enquiry_id): Path<String>,
    axum::Json(submission): axum::Json<EnquirySubmission>,
) -> Response
where
    R: EnquiryRepository + 'static,
{
    let id = EnquiryId(enquiry_id);
    match service.revise(&id, submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.detail_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<EnquiryService<R>>>,
    Path(enquiry_id): Path<String>,
) -> Response
where
    R: EnquiryRepository + 'static,
{
    let id = EnquiryId(enquiry_id);
    match service.remove(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

/// Map service failures onto the REST surface. Rejected writes always name
/// the violated fields in a structured payload, never a bare failure flag.
fn error_response(error: EnquiryServiceError) -> Response {
    match error {
        EnquiryServiceError::Validation(errors) => {
            let payload = json!({ "errors": errors.violations });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        EnquiryServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "enquiry not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        EnquiryServiceError::Repository(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
