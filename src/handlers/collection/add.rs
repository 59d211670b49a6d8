//! Item creation handler

use actix_web::{web, HttpResponse};

use super::models::{AddItemRequest, ItemResponse};
use crate::handlers::{store_error_response, ErrorResponse};
use crate::models::NewCollectionItem;
use crate::store::normalize;
use crate::store::MediaStore;

/// POST /collection/add
///
/// Tracks a new item for an existing user with progress 0. Unlike the
/// update/remove paths, the item id here must already be a JSON
/// integer. Optional source/status fall back to their defaults.
pub async fn add_item_handler(
    store: web::Data<MediaStore>,
    body: web::Json<AddItemRequest>,
) -> HttpResponse {
    let Some(user_id) = normalize::strict_integer(&body.user_id) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "userId does not reference an existing user",
        ));
    };
    let Some(item_id) = normalize::strict_integer(&body.item_id) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("itemId must be an integer"));
    };
    let Some(media_type) = normalize::non_empty_string(&body.media_type) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("mediaType is required"));
    };

    let new_item = NewCollectionItem {
        user_id,
        item_id,
        media_type: media_type.to_string(),
        source: normalize::non_empty_string(&body.source).map(str::to_string),
        status: normalize::non_empty_string(&body.status).map(str::to_string),
    };

    match store.add_item(new_item) {
        Ok(entry) => HttpResponse::Created().json(ItemResponse {
            message: "Added to collection".to_string(),
            data: entry,
        }),
        Err(err) => store_error_response(&err),
    }
}
