//! Single-item response model

use serde::Serialize;

use crate::models::CollectionEntry;

/// Body for responses carrying one item (add, update)
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub message: String,
    pub data: CollectionEntry,
}
