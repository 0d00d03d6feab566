//! API Response Handler
//!
//! Routes results from the background services into the App.

use tracing::warn;

use crate::services::ApiResponse;
use crate::App;

/// Handle one response from a background task
///
/// Response types:
/// - ListResult: one poll cycle of the file listing
/// - UploadResult: completion of a submitted upload
/// - ServerInfoResult: server identity for the info bar
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListResult { files } => {
            app.apply_list_result(files);
        }

        ApiResponse::UploadResult { upload, receipt } => {
            app.apply_upload_result(upload, receipt);
        }

        ApiResponse::ServerInfoResult { info } => match info {
            Ok(info) => app.model.server_info = Some(info),
            Err(e) => warn!("failed to fetch server info: {:#}", e),
        },
    }
}
