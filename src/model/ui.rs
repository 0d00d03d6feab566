//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, selection, search and toasts.

use std::time::Instant;

use super::types::PathPromptState;
use crate::ViewMode;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Table or plain list rendering
    pub view_mode: ViewMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // SELECTION
    // ============================================
    /// Selected row, as an index into the *visible* (filtered) rows
    pub selected_index: Option<usize>,

    /// Name of the file at `selected_index`, used to find it again after
    /// the listing or the filter changes
    pub selected_name: Option<String>,

    /// First half of a vim `gg` sequence was just typed
    pub last_key_was_g: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// File picker prompt
    pub path_prompt: Option<PathPromptState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(view_mode: ViewMode, vim_mode: bool) -> Self {
        Self {
            view_mode,
            vim_mode,
            selected_index: None,
            selected_name: None,
            last_key_was_g: false,
            path_prompt: None,
            toast_message: None,
            search_mode: false,
            search_query: String::new(),
            should_quit: false,
        }
    }

    /// Check if any modal input is currently capturing keys
    pub fn has_modal(&self) -> bool {
        self.path_prompt.is_some() || self.search_mode
    }

    /// Close all modal inputs and clear the search
    pub fn close_all_modals(&mut self) {
        self.path_prompt = None;
        self.search_mode = false;
        self.search_query.clear();
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
