//! One-shot API tasks
//!
//! Each request runs in its own tokio task and reports back to the UI loop
//! over the shared response channel.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{FileServerClient, RemoteFile, ServerInfo, UploadReceipt};
use crate::model::PendingUpload;

/// Results delivered to the UI loop
#[derive(Debug)]
pub enum ApiResponse {
    /// One poll cycle of `GET /files/list`
    ListResult {
        files: Result<Vec<RemoteFile>, anyhow::Error>,
    },

    /// Completion of `POST /files/upload` for `upload`
    UploadResult {
        upload: PendingUpload,
        receipt: Result<UploadReceipt, anyhow::Error>,
    },

    /// `GET /v1/echo`
    ServerInfoResult {
        info: Result<ServerInfo, anyhow::Error>,
    },
}

/// Submit `upload` in the background
pub fn spawn_upload(
    client: FileServerClient,
    upload: PendingUpload,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
) {
    tokio::spawn(async move {
        debug!(
            name = %upload.name,
            size = upload.size_bytes,
            mime = %upload.mime_type,
            "uploading file"
        );
        let receipt = client.upload_file(&upload).await;
        debug!(name = %upload.name, ok = receipt.is_ok(), "upload finished");

        // Receiver gone means the view was torn down; nothing left to notify
        let _ = response_tx.send(ApiResponse::UploadResult { upload, receipt });
    });
}

/// Fetch the server identity once
pub fn spawn_server_info(
    client: FileServerClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
) {
    tokio::spawn(async move {
        let info = client.get_server_info().await;
        let _ = response_tx.send(ApiResponse::ServerInfoResult { info });
    });
}
