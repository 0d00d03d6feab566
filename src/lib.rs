//! WebFTP TUI Library
//!
//! Terminal front-end for a simple file server: upload one file at a time
//! and keep a live, polled listing of the files stored on the server.

use serde::Deserialize;

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;

/// How the file listing is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table, // Name / Size / Created at / Modified at columns
    List,  // One line per file
}

impl ViewMode {
    pub fn as_str(&self) -> &str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::List => "List",
        }
    }
}
