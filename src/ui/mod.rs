//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Frame region computation shared by rendering and hit-testing
//! - [`chrome`]: Title bar with window controls
//! - [`toolbar`]: Formatting/file command strip
//! - [`overlays`]: Modal dialogs (alert, confirm, save prompt, open picker)

pub mod chrome;
pub mod layout;
pub mod toolbar;

mod overlays;
mod render;
mod status;

pub use overlays::{picker_content_top, picker_rect};
pub use render::{line_number_width, render};

/// Minimum share either pane can be squeezed to while dragging the splitter.
pub const MIN_PANE_PERCENT: u16 = 20;
pub const DEFAULT_SPLIT_PERCENT: u16 = 50;

pub const CHROME_HEIGHT: u16 = 1;
pub const TOOLBAR_HEIGHT: u16 = 1;
