//! Progress update handler

use actix_web::{web, HttpResponse};

use super::models::{ItemResponse, UpdateProgressRequest};
use crate::handlers::{store_error_response, ErrorResponse};
use crate::store::normalize::{self, ItemKey};
use crate::store::MediaStore;

/// PATCH /collection/update
///
/// Overwrites the progress of the first item matching the
/// (userId, itemId, mediaType) triple. A string-typed itemId is
/// tolerated; a triple that cannot identify any stored item is a 404,
/// same as a well-formed triple with no match.
pub async fn update_progress_handler(
    store: web::Data<MediaStore>,
    body: web::Json<UpdateProgressRequest>,
) -> HttpResponse {
    let Some(key) = ItemKey::from_payload(&body.user_id, &body.item_id, &body.media_type) else {
        return HttpResponse::NotFound()
            .json(ErrorResponse::new("Item not found in user's collection"));
    };
    let Some(progress) = normalize::coerce_integer(&body.progress) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("progress must be a number"));
    };

    match store.update_progress(&key, progress) {
        Ok(entry) => HttpResponse::Ok().json(ItemResponse {
            message: "Progress updated".to_string(),
            data: entry,
        }),
        Err(err) => store_error_response(&err),
    }
}
