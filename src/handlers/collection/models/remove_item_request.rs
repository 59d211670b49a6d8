//! Item removal request model

use serde::Deserialize;
use serde_json::Value;

/// DELETE /collection/remove body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemRequest {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub media_type: Value,
}
