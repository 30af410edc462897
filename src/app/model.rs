use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::bridge::EditorBridge;
use crate::host::HostCapabilities;
use crate::ui::{CHROME_HEIGHT, DEFAULT_SPLIT_PERCENT, TOOLBAR_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// An entry shown in the open-file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// Display name (filename or "..")
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    /// Whether this entry is a directory
    pub is_dir: bool,
}

/// The modal surface currently covering the workspace, if any.
///
/// At most one modal is ever active; every flow that needs one goes
/// through this single field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Blocking notice the user must acknowledge.
    Alert { message: String },
    /// "Discard unsaved changes?" gate in front of a new document.
    ConfirmNew,
    /// Filename entry for saving an unbound document.
    SavePrompt { input: String },
    /// Directory listing for opening a file.
    OpenPicker {
        dir: PathBuf,
        entries: Vec<PickerEntry>,
        selected: usize,
        scroll: usize,
    },
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Bridge owning the (at most one) mounted editing engine
    pub bridge: EditorBridge,
    /// Path the document is bound to; `None` means Untitled
    pub file_path: Option<PathBuf>,
    /// Host capabilities, resolved once at startup
    pub caps: HostCapabilities,
    /// Window state as last confirmed by the host
    pub is_maximized: bool,
    /// Title bar enabled by configuration (still absent without a window)
    pub chrome_enabled: bool,
    /// Whether the preview pane is shown
    pub preview_visible: bool,
    /// Editor pane share of the content width, in percent
    pub split_percent: u16,
    /// True while the splitter is being mouse-dragged
    pub splitter_dragging: bool,
    /// Line index of the first visible editor row
    pub editor_scroll_offset: usize,
    /// Active modal, if any
    pub overlay: Overlay,
    /// Warn once per external change; cleared when the toast expires
    pub disk_change_seen: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Last known terminal dimensions (cols, rows)
    pub terminal_size: (u16, u16),
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("mounted", &self.bridge.is_mounted())
            .field("preview_visible", &self.preview_visible)
            .field("overlay", &std::mem::discriminant(&self.overlay))
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(caps: HostCapabilities, terminal_size: (u16, u16)) -> Self {
        Self {
            bridge: EditorBridge::unmounted(),
            file_path: None,
            caps,
            is_maximized: false,
            chrome_enabled: true,
            preview_visible: true,
            split_percent: DEFAULT_SPLIT_PERCENT,
            splitter_dragging: false,
            editor_scroll_offset: 0,
            overlay: Overlay::None,
            disk_change_seen: false,
            toast: None,
            should_quit: false,
            terminal_size,
        }
    }

    /// Whether the title bar row exists at all this frame.
    pub const fn chrome_active(&self) -> bool {
        self.chrome_enabled && self.caps.window
    }

    /// Display name: the bound file's name, or "Untitled".
    pub fn document_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(|p| p.file_name())
            .map_or_else(
                || "Untitled".to_string(),
                |n| n.to_string_lossy().to_string(),
            )
    }

    /// Whether the mounted document has unsaved changes.
    pub fn editor_is_dirty(&self) -> bool {
        self.bridge
            .engine()
            .is_some_and(crate::engine::Engine::is_dirty)
    }

    pub const fn overlay_active(&self) -> bool {
        !matches!(self.overlay, Overlay::None)
    }

    /// Rows available to the editor pane given the current frame shape.
    pub fn editor_view_height(&self) -> usize {
        let chrome_rows = if self.chrome_active() {
            CHROME_HEIGHT
        } else {
            0
        };
        self.terminal_size
            .1
            .saturating_sub(chrome_rows + TOOLBAR_HEIGHT + 1) as usize
    }

    /// Keep the cursor line inside the visible editor window.
    pub fn ensure_cursor_visible(&mut self) {
        let Some(engine) = self.bridge.engine() else {
            return;
        };
        let height = self.editor_view_height().max(1);
        let cursor_line = engine.cursor().line;
        if cursor_line < self.editor_scroll_offset {
            self.editor_scroll_offset = cursor_line;
        } else if cursor_line >= self.editor_scroll_offset + height {
            self.editor_scroll_offset = cursor_line + 1 - height;
        }
    }

    pub fn scroll_editor_up(&mut self, n: usize) {
        self.editor_scroll_offset = self.editor_scroll_offset.saturating_sub(n);
    }

    pub fn scroll_editor_down(&mut self, n: usize) {
        let max = self
            .bridge
            .engine()
            .map_or(0, |e| e.line_count().saturating_sub(1));
        self.editor_scroll_offset = (self.editor_scroll_offset + n).min(max);
    }

    /// Scan a directory into picker entries: parent link, subdirectories,
    /// then markdown files, each group sorted case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or an entry's file
    /// type cannot be determined.
    pub fn picker_entries_for(dir: &std::path::Path) -> Result<Vec<PickerEntry>> {
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        let mut entries = vec![PickerEntry {
            name: "..".to_string(),
            path: dir.parent().unwrap_or(&dir).to_path_buf(),
            is_dir: true,
        }];

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            // Skip hidden files/dirs
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                dirs.push(PickerEntry {
                    name,
                    path,
                    is_dir: true,
                });
            } else if is_markdown_ext(&name) {
                files.push(PickerEntry {
                    name,
                    path,
                    is_dir: false,
                });
            }
        }
        dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        entries.extend(dirs);
        entries.extend(files);
        Ok(entries)
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.overlay = Overlay::Alert {
            message: message.into(),
        };
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            self.disk_change_seen = false;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

pub(super) fn is_markdown_ext(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown")
    })
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(HostCapabilities::none(), (80, 24))
    }
}
