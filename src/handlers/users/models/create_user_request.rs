//! User creation request model

use serde::Deserialize;
use serde_json::Value;

/// POST /users/add body.
///
/// The username is kept as a raw JSON value so that a missing field
/// and a wrong-typed field both surface as the same validation error
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Value,
}
