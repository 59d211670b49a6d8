//! Collection fetch response model

use serde::Serialize;

use crate::models::CollectionEntry;

/// 200 body for GET /collection/{userId}: the user's identity plus
/// their items, each with the redundant userId stripped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub user_id: i64,
    pub username: String,
    pub items: Vec<CollectionEntry>,
}
