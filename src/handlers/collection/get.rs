//! Collection fetch handler

use actix_web::{web, HttpResponse};

use super::models::CollectionResponse;
use crate::handlers::store_error_response;
use crate::store::MediaStore;

/// GET /collection/{userId}
///
/// Returns the user's identity plus their items in insertion order.
/// Unknown users are a 404, never an empty list. A non-numeric path
/// segment cannot name a user, so it is a 404 as well.
pub async fn get_collection_handler(
    store: web::Data<MediaStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(user_id) = path.into_inner().parse::<i64>() else {
        return HttpResponse::NotFound()
            .json(crate::handlers::ErrorResponse::new("User not found"));
    };

    match store.collection_for(user_id) {
        Ok((user, items)) => HttpResponse::Ok().json(CollectionResponse {
            user_id: user.user_id,
            username: user.username,
            items,
        }),
        Err(err) => store_error_response(&err),
    }
}
