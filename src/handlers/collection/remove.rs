//! Item removal handler

use actix_web::{web, HttpResponse};

use super::models::{MessageResponse, RemoveItemRequest};
use crate::handlers::{store_error_response, ErrorResponse};
use crate::store::normalize::ItemKey;
use crate::store::MediaStore;

/// DELETE /collection/remove
///
/// Removes every item matching the triple, not just the first; 404
/// when nothing matched.
pub async fn remove_item_handler(
    store: web::Data<MediaStore>,
    body: web::Json<RemoveItemRequest>,
) -> HttpResponse {
    let Some(key) = ItemKey::from_payload(&body.user_id, &body.item_id, &body.media_type) else {
        return HttpResponse::NotFound()
            .json(ErrorResponse::new("Item not found in user's collection"));
    };

    match store.remove_item(&key) {
        Ok(_removed) => HttpResponse::Ok().json(MessageResponse {
            message: "Removed from collection".to_string(),
        }),
        Err(err) => store_error_response(&err),
    }
}
