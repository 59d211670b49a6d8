//! Progress update request model

use serde::Deserialize;
use serde_json::Value;

/// PATCH /collection/update body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub item_id: Value,
    #[serde(default)]
    pub media_type: Value,
    #[serde(default)]
    pub progress: Value,
}
