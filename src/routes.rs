//! API routes configuration
//!
//! Wires every endpoint of the collection service:
//! - GET /users - List users
//! - POST /users/add - Create a user
//! - GET /collection/{userId} - A user's collection
//! - POST /collection/add - Track a new item
//! - PATCH /collection/update - Overwrite progress
//! - DELETE /collection/remove - Stop tracking an item
//! - GET /health - Liveness check

use actix_web::{error::InternalError, web, HttpResponse};

use crate::handlers::{collection, health, users, ErrorResponse};

/// Register all HTTP routes for the service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(users::list_users_handler))
        .route("/users/add", web::post().to(users::create_user_handler))
        .service(
            web::scope("/collection")
                .route("/add", web::post().to(collection::add_item_handler))
                .route(
                    "/update",
                    web::patch().to(collection::update_progress_handler),
                )
                .route(
                    "/remove",
                    web::delete().to(collection::remove_item_handler),
                )
                .route(
                    "/{user_id}",
                    web::get().to(collection::get_collection_handler),
                ),
        )
        .route("/health", web::get().to(health::health_handler));
}

/// JSON extractor configuration: unparseable bodies get the same
/// `{"error": ...}` shape as domain validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
