//! Collection handlers
//!
//! ## Endpoints
//! - GET /collection/{userId} - A user's tracked items
//! - POST /collection/add - Track a new item
//! - PATCH /collection/update - Overwrite watch/read progress
//! - DELETE /collection/remove - Stop tracking an item

pub mod models;

mod add;
mod get;
mod remove;
mod update;

pub use add::add_item_handler;
pub use get::get_collection_handler;
pub use remove::remove_item_handler;
pub use update::update_progress_handler;
