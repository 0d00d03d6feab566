//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal inputs (file
//! prompt, search box) capture keys first; everything else is a hotkey.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic;
use crate::model::PathPromptState;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.path_prompt.is_some() {
        handle_path_prompt_key(app, key);
        return;
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    let visible = app.model.visible_indices().len();
    let selected = app.model.ui.selected_index;

    // Any key other than a second 'g' breaks the gg sequence
    let last_key_was_g = std::mem::take(&mut app.model.ui.last_key_was_g);

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Char('o') => {
            app.model.ui.path_prompt = Some(PathPromptState::default());
        }

        KeyCode::Char('s') | KeyCode::Enter => {
            if !app.submit_upload() {
                let message = if app.model.upload.in_flight {
                    "Error: an upload is already in progress"
                } else {
                    "Error: no file selected (press o to choose one)"
                };
                app.model.show_toast(message.to_string());
            }
        }

        KeyCode::Char('v') => {
            app.model.ui.view_mode = logic::ui::cycle_view_mode(app.model.ui.view_mode);
        }

        KeyCode::Char('/') => {
            app.model.ui.search_mode = true;
        }
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.search_mode = true;
        }

        KeyCode::Esc => {
            if !app.model.ui.search_query.is_empty() {
                app.model.ui.search_query.clear();
                app.model.reconcile_selection();
            }
        }

        KeyCode::Down => {
            app.model
                .set_selection(logic::navigation::next_selection(selected, visible));
        }
        KeyCode::Char('j') if vim_mode => {
            app.model
                .set_selection(logic::navigation::next_selection(selected, visible));
        }
        KeyCode::Up => {
            app.model
                .set_selection(logic::navigation::prev_selection(selected, visible));
        }
        KeyCode::Char('k') if vim_mode => {
            app.model
                .set_selection(logic::navigation::prev_selection(selected, visible));
        }
        KeyCode::Home => {
            app.model.set_selection(logic::navigation::first_selection(visible));
        }
        KeyCode::Char('g') if vim_mode => {
            if last_key_was_g {
                app.model.set_selection(logic::navigation::first_selection(visible));
            } else {
                // First 'g' - wait for the second one
                app.model.ui.last_key_was_g = true;
            }
        }
        KeyCode::End => {
            app.model.set_selection(logic::navigation::last_selection(visible));
        }
        KeyCode::Char('G') if vim_mode => {
            app.model.set_selection(logic::navigation::last_selection(visible));
        }

        _ => {}
    }
}

fn handle_path_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.path_prompt = None;
        }
        KeyCode::Enter => {
            let input = app
                .model
                .ui
                .path_prompt
                .as_ref()
                .map(|prompt| prompt.input.clone())
                .unwrap_or_default();

            // Keep the prompt open on failure so the path can be corrected
            if app.select_file(&input) {
                app.model.ui.path_prompt = None;
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = app.model.ui.path_prompt.as_mut() {
                prompt.input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = app.model.ui.path_prompt.as_mut() {
                prompt.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.search_mode = false;
            app.model.ui.search_query.clear();
        }
        KeyCode::Enter => {
            // Accept: keep the filter, stop capturing keys
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => {
            app.model.ui.search_query.pop();
        }
        KeyCode::Char(c) => {
            app.model.ui.search_query.push(c);
        }
        _ => return,
    }

    app.model.reconcile_selection();
}
