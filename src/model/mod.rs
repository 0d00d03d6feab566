//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **ListingModel**: synchronized file listing and connection health
//! - **UploadModel**: staged file and in-flight submission
//! - **UiModel**: preferences, selection, search, dialogs, toasts
//!
//! No services live here: all I/O goes through `App` and `services`.

pub mod listing;
pub mod types;
pub mod ui;
pub mod upload;

pub use listing::{ConnectionState, ListingChange, ListingModel};
pub use types::*;
pub use ui::UiModel;
pub use upload::UploadModel;

use crate::api::ServerInfo;
use crate::ViewMode;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Synchronized server listing
    pub listing: ListingModel,

    /// File staged for upload
    pub upload: UploadModel,

    /// UI preferences and popups
    pub ui: UiModel,

    /// Server identity, fetched once on mount
    pub server_info: Option<ServerInfo>,
}

impl Model {
    pub fn new(view_mode: ViewMode, vim_mode: bool) -> Self {
        Self {
            listing: ListingModel::new(),
            upload: UploadModel::new(),
            ui: UiModel::new(view_mode, vim_mode),
            server_info: None,
        }
    }

    /// Indices into `listing.files` of the rows that pass the search filter
    pub fn visible_indices(&self) -> Vec<usize> {
        crate::logic::search::filter_indices(&self.listing.files, &self.ui.search_query)
    }

    /// Currently selected row (after filtering)
    pub fn selected_file(&self) -> Option<&DisplayFile> {
        let selected = self.ui.selected_index?;
        let visible = self.visible_indices();
        visible
            .get(selected)
            .and_then(|&idx| self.listing.files.get(idx))
    }

    /// Select a visible row (or nothing) and remember which file it is
    pub fn set_selection(&mut self, index: Option<usize>) {
        self.ui.selected_index = index;
        self.ui.selected_name = self.selected_file().map(|file| file.name.clone());
    }

    /// Re-anchor the selection after the listing or the filter changed.
    ///
    /// The selected file is looked up by name among the visible rows. Only
    /// when it is gone does the old position get clamped, and an empty
    /// selection lands on the first row when there is one.
    pub fn reconcile_selection(&mut self) {
        let visible = self.visible_indices();

        let by_name = self.ui.selected_name.as_deref().and_then(|name| {
            visible
                .iter()
                .position(|&idx| self.listing.files.get(idx).is_some_and(|f| f.name == name))
        });

        let index = match by_name {
            Some(position) => Some(position),
            None => crate::logic::navigation::clamp_selection(self.ui.selected_index, visible.len())
                .or_else(|| crate::logic::navigation::first_selection(visible.len())),
        };

        self.set_selection(index);
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
