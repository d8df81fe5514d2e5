//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background request service (product fetch, thumbnail probes)

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
