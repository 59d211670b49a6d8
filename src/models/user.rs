use serde::{Deserialize, Serialize};

/// A registered account that owns collection items.
///
/// Users are append-only: once created they are never updated or
/// deleted for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, assigned monotonically (max existing + 1)
    pub user_id: i64,
    /// Case-insensitively unique display name
    pub username: String,
}
