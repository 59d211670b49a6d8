//! Shared error response body

use actix_web::HttpResponse;
use serde::Serialize;

use crate::errors::StoreError;

/// Error body for every 4xx response: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    #[inline]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Map a store error to its HTTP response: validation failures are
/// 400, missing users/items are 404. The error's message text becomes
/// the body verbatim.
pub fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::Validation(msg) => HttpResponse::BadRequest().json(ErrorResponse::new(msg)),
        StoreError::NotFound(msg) => HttpResponse::NotFound().json(ErrorResponse::new(msg)),
    }
}
