//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering and side effects

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Overlay, PickerEntry, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::host::Host;
use crate::ui::DEFAULT_SPLIT_PERCENT;

/// Main application struct that owns the host and runs the event loop.
pub struct App {
    host: Box<dyn Host>,
    file_path: Option<PathBuf>,
    preview_visible: bool,
    chrome_enabled: bool,
    split_percent: u16,
}

impl App {
    /// Create a new application on the given host.
    pub fn new(host: Box<dyn Host>) -> Self {
        Self {
            host,
            file_path: None,
            preview_visible: true,
            chrome_enabled: true,
            split_percent: DEFAULT_SPLIT_PERCENT,
        }
    }

    /// Bind a file to open at startup.
    #[must_use]
    pub fn with_file(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Set initial preview pane visibility.
    #[must_use]
    pub const fn with_preview_visible(mut self, visible: bool) -> Self {
        self.preview_visible = visible;
        self
    }

    /// Enable or disable the title bar.
    #[must_use]
    pub const fn with_chrome(mut self, enabled: bool) -> Self {
        self.chrome_enabled = enabled;
        self
    }

    /// Set the initial splitter position (editor pane percentage).
    #[must_use]
    pub const fn with_split_percent(mut self, percent: u16) -> Self {
        self.split_percent = percent;
        self
    }
}
