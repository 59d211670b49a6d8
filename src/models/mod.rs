//! Domain models shared between the store and the HTTP layer.

mod item;
mod user;

pub use item::{CollectionEntry, CollectionItem, NewCollectionItem, DEFAULT_SOURCE, DEFAULT_STATUS};
pub use user::User;
