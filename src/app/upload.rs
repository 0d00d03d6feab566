//! Upload methods
//!
//! User actions around the single pending upload:
//! - Stage a file from a typed path
//! - Submit it (only when one is staged and none is in flight)
//! - Settle the result

use anyhow::Error;
use tracing::{debug, warn};

use crate::api::UploadReceipt;
use crate::logic;
use crate::model::PendingUpload;
use crate::services;
use crate::App;

impl App {
    /// Stage the file at `input` (as typed by the user), replacing any
    /// previous selection. On error the previous selection is kept.
    pub fn select_file(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        let path = logic::upload::expand_path(input);
        match logic::upload::stage_file(&path) {
            Ok(upload) => {
                debug!(path = %upload.path.display(), size = upload.size_bytes, "file selected");
                self.model.upload.select(upload);
                true
            }
            Err(e) => {
                warn!("cannot select {}: {:#}", path.display(), e);
                self.model.show_toast(format!(
                    "Error selecting file: {}",
                    logic::errors::format_error_message(&e)
                ));
                false
            }
        }
    }

    /// Submit the pending file. Returns false when there is nothing to send
    /// or an upload is already running.
    pub fn submit_upload(&mut self) -> bool {
        let Some(upload) = self.model.upload.begin_submit() else {
            return false;
        };

        services::api::spawn_upload(self.client.clone(), upload, self.api_tx.clone());
        true
    }

    pub(crate) fn apply_upload_result(
        &mut self,
        upload: PendingUpload,
        receipt: Result<UploadReceipt, Error>,
    ) {
        match receipt {
            Ok(receipt) => {
                debug!(name = %upload.name, stored_as = ?receipt.file_name, "upload succeeded");
                self.model.upload.finish_submit(&upload, true);
                self.model.show_toast("File uploaded successfully".to_string());
                // The listing is only updated by the next poll cycle
            }
            Err(error) => {
                warn!("upload of {} failed: {:#}", upload.name, error);
                self.model.upload.finish_submit(&upload, false);
                self.model.show_toast(format!(
                    "Error uploading file: {}",
                    logic::errors::format_error_message(&error)
                ));
            }
        }
    }
}
