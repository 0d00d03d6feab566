//! Listing Model
//!
//! The synchronized view of the server's file list: the displayed rows,
//! the fingerprint of the last accepted listing, and connection health.

use std::sync::Arc;

use super::types::DisplayFile;
use crate::logic::errors::ErrorType;

/// Connection state derived from the most recent poll cycle
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// No poll cycle has completed yet
    Connecting,
    /// Last poll cycle succeeded
    Connected,
    /// Last poll cycle failed
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Outcome of applying one successful poll cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingChange {
    Unchanged,
    Replaced,
}

#[derive(Clone, Debug)]
pub struct ListingModel {
    /// Rows on screen. Replaced wholesale, never mutated in place.
    pub files: Arc<Vec<DisplayFile>>,

    /// Fingerprint of `files` (None until the first successful cycle)
    pub fingerprint: Option<String>,

    pub connection_state: ConnectionState,

    /// Number of times `files` was replaced
    pub replacements: u64,
}

impl ListingModel {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Vec::new()),
            fingerprint: None,
            connection_state: ConnectionState::Connecting,
            replacements: 0,
        }
    }

    /// Accept a freshly derived listing.
    ///
    /// Only swaps the displayed rows when `fingerprint` differs from the one
    /// retained from the previous accepted listing.
    pub fn apply(&mut self, files: Vec<DisplayFile>, fingerprint: String) -> ListingChange {
        self.connection_state = ConnectionState::Connected;

        if self.fingerprint.as_deref() == Some(fingerprint.as_str()) {
            return ListingChange::Unchanged;
        }

        self.files = Arc::new(files);
        self.fingerprint = Some(fingerprint);
        self.replacements += 1;
        ListingChange::Replaced
    }

    /// Record a failed cycle. Displayed rows and fingerprint stay as they are.
    pub fn record_failure(&mut self, error_type: ErrorType, message: String) {
        self.connection_state = ConnectionState::Disconnected {
            error_type,
            message,
        };
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.connection_state, ConnectionState::Connected)
    }
}

impl Default for ListingModel {
    fn default() -> Self {
        Self::new()
    }
}
