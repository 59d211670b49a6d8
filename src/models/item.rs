use serde::{Deserialize, Serialize};

/// Default `source` when the caller omits it.
pub const DEFAULT_SOURCE: &str = "unknown";
/// Default `status` when the caller omits it.
pub const DEFAULT_STATUS: &str = "planned";

/// A tracked media entry as stored in the items table.
///
/// The (user_id, item_id, media_type) triple is the lookup key for
/// update and remove. Triple uniqueness is NOT enforced on insert, so
/// duplicate triples may coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub user_id: i64,
    /// Id of the media entry in whatever external catalog the client
    /// uses; never checked for existence here.
    pub item_id: i64,
    pub media_type: String,
    pub source: String,
    pub status: String,
    pub progress: i64,
}

impl CollectionItem {
    /// The user-scoped view of this item: identical fields minus
    /// `user_id`, which is implied by the surrounding context and
    /// never repeated in responses.
    pub fn entry(&self) -> CollectionEntry {
        CollectionEntry {
            item_id: self.item_id,
            media_type: self.media_type.clone(),
            source: self.source.clone(),
            status: self.status.clone(),
            progress: self.progress,
        }
    }
}

/// A collection item as it appears on the wire, scoped under a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    pub item_id: i64,
    pub media_type: String,
    pub source: String,
    pub status: String,
    pub progress: i64,
}

/// Input for inserting a new item. Optional fields fall back to the
/// fixed string defaults, never to null.
#[derive(Debug, Clone)]
pub struct NewCollectionItem {
    pub user_id: i64,
    pub item_id: i64,
    pub media_type: String,
    pub source: Option<String>,
    pub status: Option<String>,
}
