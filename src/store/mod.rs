//! MediaStore - process-local tables for users and collection items
//!
//! The store owns two in-memory tables:
//! - `users`: append-only account records
//! - `items`: tracked media entries, keyed for lookup by the
//!   (user_id, item_id, media_type) triple
//!
//! It is an explicitly owned object injected into request handlers,
//! not a module-level singleton, so tests can run against isolated
//! instances. Every operation acquires the table lock at most once
//! and completes synchronously inside it, so readers never observe a
//! partial mutation.

pub mod normalize;

use parking_lot::RwLock;

use crate::errors::{StoreError, StoreResult};
use crate::models::{
    CollectionEntry, CollectionItem, NewCollectionItem, User, DEFAULT_SOURCE, DEFAULT_STATUS,
};
use normalize::ItemKey;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    items: Vec<CollectionItem>,
}

/// In-memory store for users and their collection items.
#[derive(Debug, Default)]
pub struct MediaStore {
    tables: RwLock<Tables>,
}

impl MediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the demo records used for manual
    /// testing: one user and two tracked anime entries.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.write();
            tables.users.push(User {
                user_id: 1,
                username: "demo".to_string(),
            });
            tables.items.push(CollectionItem {
                user_id: 1,
                item_id: 101,
                media_type: "anime".to_string(),
                source: DEFAULT_SOURCE.to_string(),
                status: "watching".to_string(),
                progress: 12,
            });
            tables.items.push(CollectionItem {
                user_id: 1,
                item_id: 205,
                media_type: "anime".to_string(),
                source: DEFAULT_SOURCE.to_string(),
                status: "completed".to_string(),
                progress: 24,
            });
        }
        store
    }

    /// All users, in insertion order.
    pub fn list_users(&self) -> Vec<User> {
        self.tables.read().users.clone()
    }

    /// Create a user with the next monotonic id.
    ///
    /// Fails when the username is empty or already taken, compared
    /// case-insensitively.
    pub fn create_user(&self, username: &str) -> StoreResult<User> {
        if username.is_empty() {
            return Err(StoreError::validation(
                "username is required and must be a non-empty string",
            ));
        }

        let mut tables = self.tables.write();
        let lowered = username.to_lowercase();
        if tables
            .users
            .iter()
            .any(|u| u.username.to_lowercase() == lowered)
        {
            return Err(StoreError::validation(format!(
                "username '{}' is already taken",
                username
            )));
        }

        let user_id = tables.users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1;
        let user = User {
            user_id,
            username: username.to_string(),
        };
        tables.users.push(user.clone());

        log::info!("created user {} ('{}')", user_id, user.username);
        Ok(user)
    }

    /// A user's identity plus their items in insertion order, with
    /// the user_id stripped from each item.
    pub fn collection_for(&self, user_id: i64) -> StoreResult<(User, Vec<CollectionEntry>)> {
        let tables = self.tables.read();
        let user = tables
            .users
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User not found"))?;

        let items = tables
            .items
            .iter()
            .filter(|i| i.user_id == user_id)
            .map(CollectionItem::entry)
            .collect();

        Ok((user, items))
    }

    /// Append a new item with progress 0 and defaults applied.
    ///
    /// Fails when the user_id does not reference an existing user; the
    /// items table is left untouched in that case. Duplicate
    /// (user_id, item_id, media_type) triples are allowed.
    pub fn add_item(&self, new: NewCollectionItem) -> StoreResult<CollectionEntry> {
        let mut tables = self.tables.write();
        if !tables.users.iter().any(|u| u.user_id == new.user_id) {
            return Err(StoreError::validation(format!(
                "userId {} does not reference an existing user",
                new.user_id
            )));
        }

        let item = CollectionItem {
            user_id: new.user_id,
            item_id: new.item_id,
            media_type: new.media_type,
            source: new.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            status: new.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            progress: 0,
        };
        let entry = item.entry();
        tables.items.push(item);

        log::info!(
            "user {} added {} item {}",
            new.user_id,
            entry.media_type,
            entry.item_id
        );
        Ok(entry)
    }

    /// Overwrite the progress of the FIRST item matching the triple.
    ///
    /// Progress is written unconditionally; no range check, negatives
    /// included. Later duplicates of the same triple are untouched.
    pub fn update_progress(&self, key: &ItemKey, progress: i64) -> StoreResult<CollectionEntry> {
        let mut tables = self.tables.write();
        let item = tables
            .items
            .iter_mut()
            .find(|i| key.matches(i))
            .ok_or_else(|| StoreError::not_found("Item not found in user's collection"))?;

        item.progress = progress;
        log::debug!(
            "user {} set progress {} on {} item {}",
            key.user_id,
            progress,
            key.media_type,
            key.item_id
        );
        Ok(item.entry())
    }

    /// Remove ALL items matching the triple, returning how many were
    /// dropped. Fails when nothing matched.
    ///
    /// The first-match/all-match asymmetry with [`Self::update_progress`]
    /// is part of the API contract.
    pub fn remove_item(&self, key: &ItemKey) -> StoreResult<usize> {
        let mut tables = self.tables.write();
        let before = tables.items.len();
        tables.items.retain(|i| !key.matches(i));
        let removed = before - tables.items.len();

        if removed == 0 {
            return Err(StoreError::not_found("Item not found in user's collection"));
        }

        log::info!(
            "user {} removed {} {} item(s) with id {}",
            key.user_id,
            removed,
            key.media_type,
            key.item_id
        );
        Ok(removed)
    }
}
