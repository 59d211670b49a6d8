//! Liveness handler

use actix_web::{HttpResponse, Responder};

use super::models::HealthResponse;

/// GET /health - static service identity, status, and the current
/// UTC timestamp. Returns 200 whenever the server is running.
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}
