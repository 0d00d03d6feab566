//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and message extraction
//! - formatting: Grouped byte counts and local timestamps
//! - listing: Sorting, display projection and fingerprinting of listings
//! - navigation: Selection index calculations
//! - search: Row filtering by query
//! - ui: UI state transitions and cycling
//! - upload: Turning a typed path into a staged upload

pub mod errors;
pub mod formatting;
pub mod listing;
pub mod navigation;
pub mod search;
pub mod ui;
pub mod upload;
