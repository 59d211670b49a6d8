//! Health check handler
//!
//! ## Endpoints
//! - GET /health - Service identity and liveness
//!
//! Unauthenticated, like the rest of the service; intended for load
//! balancer checks and quick manual probing.

pub mod models;

mod health;

pub use health::health_handler;
