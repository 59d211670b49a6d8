//! Request/response models for collection endpoints

mod add_item_request;
mod collection_response;
mod item_response;
mod message_response;
mod remove_item_request;
mod update_progress_request;

pub use add_item_request::AddItemRequest;
pub use collection_response::CollectionResponse;
pub use item_response::ItemResponse;
pub use message_response::MessageResponse;
pub use remove_item_request::RemoveItemRequest;
pub use update_progress_request::UpdateProgressRequest;
