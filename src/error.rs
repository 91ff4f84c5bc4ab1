use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::store::StoreError;

const OVERLAP_DETAIL: &str = "This leave request overlaps with an existing leave request";

#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field/rule violations; never mutates the store.
    #[error("Invalid request")]
    Validation(Vec<String>),
    /// Date-range conflict with an existing record for the same employee.
    #[error("This leave request overlaps with an existing leave request")]
    Overlap,
    /// Unexpected failure during processing.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Overlap => ApiError::Overlap,
            StoreError::Poisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Overlap => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(details) => validation_response(details),
            ApiError::Overlap => validation_response(&[OVERLAP_DETAIL.to_string()]),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "unhandled error");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": message
                }))
            }
        }
    }
}

fn validation_response(details: &[String]) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "VALIDATION_ERROR",
        "message": "Invalid request",
        "details": details
    }))
}

/// JSON extractor config that reports malformed bodies as a 400 with the
/// same envelope as validation failures, instead of a bare 500.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            validation_response(&[detail]),
        )
        .into()
    })
}
