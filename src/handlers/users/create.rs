//! User creation handler

use actix_web::{web, HttpResponse};

use super::models::{CreateUserRequest, CreatedUserResponse};
use crate::handlers::{store_error_response, ErrorResponse};
use crate::store::normalize;
use crate::store::MediaStore;

/// POST /users/add
///
/// Creates a user with the next monotonic id. 400 when the username is
/// missing, not a string, empty, or already taken case-insensitively.
pub async fn create_user_handler(
    store: web::Data<MediaStore>,
    body: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let Some(username) = normalize::non_empty_string(&body.username) else {
        log::warn!("rejected user creation without a usable username");
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "username is required and must be a non-empty string",
        ));
    };

    match store.create_user(username) {
        Ok(user) => HttpResponse::Created().json(CreatedUserResponse {
            message: "User created".to_string(),
            data: user,
        }),
        Err(err) => store_error_response(&err),
    }
}
