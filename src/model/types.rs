//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use serde::Serialize;
use std::path::PathBuf;

/// Locale-formatted projection of a `RemoteFile`, ready to render.
///
/// Field order matters: the listing fingerprint is the JSON form of these
/// structs, so reordering fields changes every fingerprint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayFile {
    pub name: String,
    pub size: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "modifiedAt")]
    pub modified_at: String,
}

/// A local file staged for upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub path: PathBuf,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Path input dialog used to pick the file to upload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathPromptState {
    pub input: String,
}
