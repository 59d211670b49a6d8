//! User listing handler

use actix_web::{web, HttpResponse, Responder};

use crate::store::MediaStore;

/// GET /users - All users as a bare array, in insertion order.
pub async fn list_users_handler(store: web::Data<MediaStore>) -> impl Responder {
    HttpResponse::Ok().json(store.list_users())
}
