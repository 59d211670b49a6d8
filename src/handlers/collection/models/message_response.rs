//! Message-only response model

use serde::Serialize;

/// Body for responses with no data payload (remove)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
