//! Listing synchronization
//!
//! Applies poll cycle results to the model. A successful cycle only
//! replaces the displayed rows when the fingerprint moved; a failed cycle
//! leaves them as they are and raises a toast.

use anyhow::Error;
use tracing::{debug, warn};

use crate::api::RemoteFile;
use crate::logic;
use crate::model::ListingChange;
use crate::App;

impl App {
    pub(crate) fn apply_list_result(&mut self, files: Result<Vec<RemoteFile>, Error>) {
        match files {
            Ok(files) => self.apply_listing(files),
            Err(error) => self.apply_listing_failure(&error),
        }
    }

    fn apply_listing(&mut self, files: Vec<RemoteFile>) {
        let rows = logic::listing::normalize(files);

        let fingerprint = match logic::listing::fingerprint(&rows) {
            Ok(fp) => fp,
            Err(e) => {
                // Without a fingerprint we can't prove "unchanged", so take the rows
                warn!("failed to fingerprint listing: {}", e);
                format!("unfingerprinted-{}", self.model.listing.replacements)
            }
        };

        match self.model.listing.apply(rows, fingerprint) {
            ListingChange::Unchanged => {}
            ListingChange::Replaced => {
                debug!(count = self.model.listing.files.len(), "listing replaced");
                self.model.reconcile_selection();
            }
        }
    }

    fn apply_listing_failure(&mut self, error: &Error) {
        let message = logic::errors::format_error_message(error);
        warn!("listing failed: {:#}", error);

        self.model.listing.record_failure(
            logic::errors::classify_error(error),
            message.clone(),
        );
        self.model
            .show_toast(format!("Error checking files: {}", message));
    }
}
