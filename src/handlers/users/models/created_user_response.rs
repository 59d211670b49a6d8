//! User creation response model

use serde::Serialize;

use crate::models::User;

/// 201 body for POST /users/add
#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub message: String,
    pub data: User,
}
