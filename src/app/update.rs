use crate::app::Model;
use crate::app::model::{Overlay, ToastLevel};
use crate::engine::EditCommand;
use crate::ui::layout::clamp_split_percent;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Dispatch a command to the mounted engine (dropped when unmounted)
    Edit(EditCommand),
    /// Scroll editor viewport up by n lines
    EditorScrollUp(usize),
    /// Scroll editor viewport down by n lines
    EditorScrollDown(usize),

    // Document lifecycle
    /// New document requested; asks for confirmation first
    RequestNew,
    /// Confirmed: replace with an empty Untitled document
    ConfirmNewAccept,
    ConfirmNewCancel,
    /// Open a file; brings up the picker
    RequestOpen,
    /// Save the document (prompts for a name when Untitled)
    RequestSave,

    // Open picker
    PickerUp,
    PickerDown,
    /// Activate the selected picker entry
    PickerActivate,
    /// Activate a picker entry by index (mouse click)
    PickerClick(usize),
    PickerCancel,

    // Save prompt
    SavePromptInput(char),
    SavePromptBackspace,
    /// Commit the entered filename
    SavePromptAccept,
    SavePromptCancel,

    /// Acknowledge the active alert
    DismissAlert,

    // Layout
    /// Toggle the preview pane
    TogglePreview,
    SplitDragStart,
    /// Move the splitter to this editor-pane percentage
    SplitDragTo(u16),
    SplitDragEnd,

    // Window chrome
    WindowMinimize,
    WindowToggleMaximize,
    /// Close button; the host is told, then the app quits
    WindowClose,
    WindowDragStart,

    /// The bound file changed on disk underneath the editor
    DiskChanged,

    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Side effects (file IO, window requests) live next to the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Edit(cmd) => {
            // Dropped, not queued, when no engine is mounted.
            if model.bridge.dispatch(cmd) {
                model.ensure_cursor_visible();
            }
        }
        Message::EditorScrollUp(n) => model.scroll_editor_up(n),
        Message::EditorScrollDown(n) => model.scroll_editor_down(n),

        Message::RequestNew => {
            model.overlay = Overlay::ConfirmNew;
        }
        Message::ConfirmNewAccept => {
            model.bridge.set_content("");
            model.file_path = None;
            model.editor_scroll_offset = 0;
            model.overlay = Overlay::None;
            model.show_toast(ToastLevel::Info, "New document");
        }
        Message::ConfirmNewCancel
        | Message::PickerCancel
        | Message::SavePromptCancel
        | Message::DismissAlert => {
            model.overlay = Overlay::None;
        }

        Message::RequestOpen => {
            if !model.caps.files {
                model.show_alert("File access is not available on this host");
            }
            // Picker population happens in the side-effect handler.
        }
        Message::RequestSave => {
            if !model.caps.files {
                model.show_alert("File access is not available on this host");
            } else if !model.bridge.is_mounted() {
                // Explicit not-ready signal: never silently save an empty file.
                model.show_alert("The editor has not finished loading");
            } else if model.file_path.is_none() {
                model.overlay = Overlay::SavePrompt {
                    input: String::new(),
                };
            }
            // Bound-path save happens in the side-effect handler.
        }

        Message::PickerUp => {
            if let Overlay::OpenPicker {
                selected, scroll, ..
            } = &mut model.overlay
            {
                *selected = selected.saturating_sub(1);
                *scroll = (*scroll).min(*selected);
            }
        }
        Message::PickerDown => {
            let height = model.picker_visible_rows();
            if let Overlay::OpenPicker {
                entries,
                selected,
                scroll,
                ..
            } = &mut model.overlay
            {
                *selected = (*selected + 1).min(entries.len().saturating_sub(1));
                if *selected >= *scroll + height {
                    *scroll = *selected + 1 - height;
                }
            }
        }
        Message::PickerClick(idx) => {
            if let Overlay::OpenPicker {
                entries, selected, ..
            } = &mut model.overlay
                && idx < entries.len()
            {
                *selected = idx;
            }
        }
        // Activation performs IO; handled in the side-effect handler.
        Message::PickerActivate => {}

        Message::SavePromptInput(c) => {
            if let Overlay::SavePrompt { input } = &mut model.overlay
                && !c.is_control()
            {
                input.push(c);
            }
        }
        Message::SavePromptBackspace => {
            if let Overlay::SavePrompt { input } = &mut model.overlay {
                input.pop();
            }
        }
        // The entered name is consumed by the side-effect handler, which
        // also replaces the overlay with the save result.
        Message::SavePromptAccept => {}

        Message::TogglePreview => {
            model.preview_visible = !model.preview_visible;
        }
        Message::SplitDragStart => model.splitter_dragging = true,
        Message::SplitDragTo(pct) => {
            if model.splitter_dragging {
                model.split_percent = clamp_split_percent(pct);
            }
        }
        Message::SplitDragEnd => model.splitter_dragging = false,

        // Host calls happen in the side-effect handler; closing the window
        // is quitting.
        Message::WindowMinimize | Message::WindowToggleMaximize | Message::WindowDragStart => {}
        Message::WindowClose | Message::Quit => model.should_quit = true,

        Message::DiskChanged => {
            if !model.disk_change_seen {
                model.disk_change_seen = true;
                model.show_toast(
                    ToastLevel::Warning,
                    "File changed on disk — saving will overwrite it",
                );
            }
        }

        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.ensure_cursor_visible();
        }
        Message::Redraw => {}
    }

    model
}

impl Model {
    /// Rows the picker list can show, mirroring the overlay's geometry.
    pub(super) fn picker_visible_rows(&self) -> usize {
        let area = ratatui::layout::Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1);
        crate::ui::picker_rect(area).height.saturating_sub(5).max(1) as usize
    }
}
