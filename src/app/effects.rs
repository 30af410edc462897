use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::model::{Overlay, PickerEntry};
use crate::app::{App, Message, Model, ToastLevel};
use crate::host::Host;
use crate::watcher::FileWatcher;

impl App {
    pub(super) fn make_file_watcher(path: &Path) -> notify::Result<FileWatcher> {
        FileWatcher::new(path, Duration::from_millis(200))
    }

    /// Everything impure that a message triggers: file IO, watcher
    /// rebinding, window requests. Runs after the pure update.
    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        host: &mut dyn Host,
        msg: &Message,
    ) {
        match msg {
            Message::RequestOpen if model.caps.files => {
                // Deliberately no unsaved-changes gate here: opening replaces
                // the document even when it is dirty.
                let dir = model
                    .file_path
                    .as_deref()
                    .and_then(Path::parent)
                    .filter(|p| !p.as_os_str().is_empty())
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
                Self::populate_picker(model, &dir);
            }
            Message::PickerActivate | Message::PickerClick(_) => {
                Self::activate_picker_selection(model, file_watcher, host);
            }
            Message::RequestSave => {
                if model.caps.files && model.file_path.is_some() && model.bridge.is_mounted() {
                    let path = model.file_path.clone().unwrap_or_default();
                    Self::save_document(model, file_watcher, host, &path, true);
                }
            }
            Message::SavePromptAccept => {
                let Overlay::SavePrompt { input } = &model.overlay else {
                    return;
                };
                let name = input.trim();
                if name.is_empty() {
                    return;
                }
                let path = with_markdown_extension(name);
                Self::save_document(model, file_watcher, host, &path, false);
            }
            Message::ConfirmNewAccept => {
                // Untitled documents have nothing to watch.
                *file_watcher = None;
            }
            Message::WindowMinimize => {
                host.minimize();
                model.is_maximized = host.is_maximized();
            }
            Message::WindowToggleMaximize => {
                host.toggle_maximize();
                // Confirm with the host rather than assuming the request took.
                model.is_maximized = host.is_maximized();
            }
            Message::WindowClose => host.close(),
            Message::WindowDragStart => host.start_dragging(),
            Message::Resize(..) => {
                model.is_maximized = host.is_maximized();
            }
            _ => {}
        }
    }

    fn populate_picker(model: &mut Model, dir: &Path) {
        match Model::picker_entries_for(dir) {
            Ok(entries) => {
                model.overlay = Overlay::OpenPicker {
                    dir: dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()),
                    entries,
                    selected: 0,
                    scroll: 0,
                };
            }
            Err(err) => {
                model.show_alert(format!("Failed to list {}: {err}", dir.display()));
            }
        }
    }

    fn activate_picker_selection(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        host: &mut dyn Host,
    ) {
        let Overlay::OpenPicker {
            entries, selected, ..
        } = &model.overlay
        else {
            return;
        };
        let Some(entry) = entries.get(*selected).cloned() else {
            return;
        };
        if entry.is_dir {
            Self::populate_picker(model, &entry.path);
        } else {
            Self::open_document(model, file_watcher, host, &entry);
        }
    }

    fn open_document(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        host: &mut dyn Host,
        entry: &PickerEntry,
    ) {
        match host.read_text(&entry.path) {
            Ok(text) => {
                tracing::info!(path = %entry.path.display(), bytes = text.len(), "opened document");
                // Wholesale replacement: the bridge discards the old engine.
                model.bridge.set_content(&text);
                model.file_path = Some(entry.path.clone());
                model.editor_scroll_offset = 0;
                model.overlay = Overlay::None;
                Self::rebind_watcher(model, file_watcher);
                model.show_toast(ToastLevel::Info, format!("Opened {}", entry.name));
            }
            Err(err) => {
                tracing::error!(path = %entry.path.display(), %err, "open failed");
                model.show_alert(format!("Failed to open file: {err}"));
            }
        }
    }

    fn save_document(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        host: &mut dyn Host,
        path: &Path,
        already_bound: bool,
    ) {
        // Explicit not-ready signal from the bridge, never an empty string.
        let Some(content) = model.bridge.content() else {
            model.show_alert("The editor has not finished loading");
            return;
        };
        match host.write_text(path, &content) {
            Ok(()) => {
                tracing::info!(path = %path.display(), bytes = content.len(), "saved document");
                if let Some(engine) = model.bridge.engine_mut() {
                    engine.mark_clean();
                }
                if !already_bound {
                    model.file_path = Some(path.to_path_buf());
                    Self::rebind_watcher(model, file_watcher);
                }
                // Our own write must not surface as an external change.
                if let Some(watcher) = file_watcher.as_mut() {
                    watcher.suppress_pending();
                }
                model.disk_change_seen = false;
                model.show_alert("File saved successfully");
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "save failed");
                model.show_alert(format!("Failed to save file: {err}"));
            }
        }
    }

    pub(super) fn rebind_watcher(model: &Model, file_watcher: &mut Option<FileWatcher>) {
        *file_watcher = match model.file_path.as_deref() {
            Some(path) => match Self::make_file_watcher(path) {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "file watch unavailable");
                    None
                }
            },
            None => None,
        };
    }
}

fn with_markdown_extension(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    if crate::app::model::is_markdown_ext(name) {
        path
    } else {
        PathBuf::from(format!("{name}.md"))
    }
}

#[cfg(test)]
mod tests {
    use super::with_markdown_extension;
    use std::path::PathBuf;

    #[test]
    fn test_md_extension_appended_when_missing() {
        assert_eq!(with_markdown_extension("notes"), PathBuf::from("notes.md"));
    }

    #[test]
    fn test_existing_markdown_extension_kept() {
        assert_eq!(
            with_markdown_extension("notes.MD"),
            PathBuf::from("notes.MD")
        );
        assert_eq!(
            with_markdown_extension("a.markdown"),
            PathBuf::from("a.markdown")
        );
    }
}
