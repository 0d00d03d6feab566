//! Upload staging
//!
//! Resolves what the user typed into the file prompt into a `PendingUpload`.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::model::PendingUpload;

/// Expand a leading `~` to the home directory
pub fn expand_path(input: &str) -> PathBuf {
    let input = input.trim();

    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(input)
}

/// MIME type from the file extension, `application/octet-stream` when unknown
pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Inspect `path` and build the upload descriptor for it.
///
/// Only checks that the path names a regular file; type and size are
/// never restricted. The file contents are not read here: the bytes are
/// loaded when the upload is actually sent, so a file edited after
/// selection is uploaded in its latest state.
///
/// # Arguments
/// * `path` - Path to the file, already `~`-expanded (see [`expand_path`])
///
/// # Returns
/// * `Ok(PendingUpload)` - Name, guessed MIME type and size in bytes
/// * `Err` - If the path does not exist, is unreadable, is a directory, or
///   has no final file name component
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use webftp_tui::logic::upload::stage_file;
///
/// let upload = stage_file(Path::new("/tmp/report.pdf")).unwrap();
/// assert_eq!(upload.name, "report.pdf");
/// assert_eq!(upload.mime_type, "application/pdf");
/// ```
pub fn stage_file(path: &Path) -> Result<PendingUpload> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot open {}", path.display()))?;

    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("{} has no file name", path.display()))?;

    Ok(PendingUpload {
        path: path.to_path_buf(),
        name,
        mime_type: guess_mime_type(path),
        size_bytes: metadata.len(),
    })
}
