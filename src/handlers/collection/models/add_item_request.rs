//! Item creation request model

use serde::Deserialize;
use serde_json::Value;

/// POST /collection/add body.
///
/// Fields stay raw JSON values; the handler decides which ones need
/// strict integers and which fall back to defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub media_type: Value,
    #[serde(default)]
    pub source: Value,
    #[serde(default)]
    pub status: Value,
}
