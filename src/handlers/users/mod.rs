//! User account handlers
//!
//! ## Endpoints
//! - GET /users - List all users
//! - POST /users/add - Create a user

pub mod models;

mod create;
mod list;

pub use create::create_user_handler;
pub use list::list_users_handler;
