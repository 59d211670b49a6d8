//! Health response model

mod health_response;

pub use health_response::HealthResponse;
