// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Inkpad
//!
//! A terminal markdown editor with live preview.
//!
//! Inkpad is a thin shell around an embedded editing engine:
//! - Two resizable panes: source editor and rendered preview
//! - A title bar with window controls when the host terminal has them
//! - A formatting toolbar (bold, italic, headings, lists, table)
//! - Open/save with a disk-change warning for the bound file
//!
//! ## Architecture
//!
//! Inkpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`engine`]: The embedded text editing engine
//! - [`bridge`]: Mount/remount management over the engine
//! - [`host`]: File system and window capabilities
//! - [`preview`]: Markdown rendering for the preview pane
//! - [`ui`]: Terminal UI components
//! - [`watcher`]: Disk-change watching for the bound file

pub mod app;
pub mod bridge;
pub mod config;
pub mod engine;
pub mod host;
pub mod preview;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::bridge::EditorBridge;
    pub use crate::engine::{EditCommand, Engine};
    pub use crate::host::{Host, HostCapabilities};
}
