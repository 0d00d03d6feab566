//! Listing poller
//!
//! Background task that fetches `GET /files/list` on a fixed period. The
//! task lives exactly as long as its `ListPoller` handle.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, warn};

use super::api::ApiResponse;
use crate::api::FileServerClient;

/// Handle to the running poll task. Dropping it aborts the task.
pub struct ListPoller {
    handle: JoinHandle<()>,
}

impl ListPoller {
    /// Start polling. The first cycle runs immediately, then every `period`.
    ///
    /// Each cycle is awaited before the next tick is taken, so a slow
    /// response delays the schedule instead of overlapping it.
    pub fn spawn(
        client: FileServerClient,
        period: Duration,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let files = client.list_files().await;
                match &files {
                    Ok(files) => debug!(count = files.len(), "poll cycle succeeded"),
                    Err(e) => warn!("poll cycle failed: {:#}", e),
                }

                if response_tx.send(ApiResponse::ListResult { files }).is_err() {
                    debug!("listing receiver closed, stopping poller");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ListPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
