use chrono::Utc;
use serde::Serialize;

/// 200 body for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service identity (package name)
    pub service: String,
    /// Fixed status string while the process is up
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
