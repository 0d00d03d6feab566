//! App Orchestration
//!
//! `App` ties the pure model to the background services. Methods are
//! grouped by domain:
//! - listing: applying poll cycles to the synchronized listing
//! - upload: staging and submitting the pending file
//!
//! The view "mounts" when `mount` starts the background tasks and
//! "unmounts" on `unmount` (or drop), which aborts the poller.

pub(crate) mod listing;
pub(crate) mod upload;

use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::FileServerClient;
use crate::config::Config;
use crate::handlers;
use crate::model::Model;
use crate::services::{self, ApiResponse, ListPoller};

pub struct App {
    pub model: Model,

    client: FileServerClient,
    api_tx: mpsc::UnboundedSender<ApiResponse>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    poller: Option<ListPoller>,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = FileServerClient::new(&config.base_url, config.request_timeout())?;
        let (api_tx, api_rx) = mpsc::unbounded_channel();

        Ok(Self {
            model: Model::new(config.view_mode, config.vim_mode),
            client,
            api_tx,
            api_rx,
            poller: None,
            poll_interval: config.poll_interval(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Start background activity: the listing poller and the one-off
    /// server info request. Must run inside a tokio runtime.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        debug!(base_url = %self.client.base_url(), interval = ?self.poll_interval, "mounting view");
        self.poller = Some(ListPoller::spawn(
            self.client.clone(),
            self.poll_interval,
            self.api_tx.clone(),
        ));
        services::api::spawn_server_info(self.client.clone(), self.api_tx.clone());
    }

    /// Stop the poller. In-flight one-shot requests are left to finish.
    pub fn unmount(&mut self) {
        if self.poller.take().is_some() {
            debug!("unmounting view");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.as_ref().is_some_and(ListPoller::is_running)
    }

    /// Drain every response that has already arrived. Never blocks.
    pub fn process_pending_responses(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(response) = self.api_rx.try_recv() {
            handlers::handle_api_response(self, response);
            processed += 1;
        }
        processed
    }

    /// Wait for the next response and apply it
    pub async fn process_next_response(&mut self) -> bool {
        match self.api_rx.recv().await {
            Some(response) => {
                handlers::handle_api_response(self, response);
                true
            }
            None => false,
        }
    }

    /// Download link of the selected row
    pub fn selected_download_url(&self) -> Option<String> {
        self.model
            .selected_file()
            .map(|file| self.client.download_url(&file.name))
    }
}
