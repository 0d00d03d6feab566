//! Event Handlers
//!
//! This module contains handlers for the two event sources:
//! - api: responses from background service tasks
//! - keyboard: user keyboard input

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
