//! External Services
//!
//! This module contains background tasks that talk to the file server:
//! - api: one-shot requests (upload, server info) and the response type
//! - poller: the recurring listing fetch

pub mod api;
pub mod poller;

// Re-export commonly used types for convenience
pub use api::ApiResponse;
pub use poller::ListPoller;
