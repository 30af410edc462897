use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use crate::app::model::Overlay;
use crate::app::{App, Message, Model};
use crate::engine::{Direction, EditCommand};
use crate::ui::chrome::ChromeButton;
use crate::ui::toolbar::ToolbarAction;
use crate::ui::{chrome, layout, toolbar};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
        // Modal surfaces capture the keyboard entirely.
        match &model.overlay {
            Overlay::Alert { .. } => return Some(Message::DismissAlert),
            Overlay::ConfirmNew => {
                return match key.code {
                    KeyCode::Enter | KeyCode::Char('y') => Some(Message::ConfirmNewAccept),
                    KeyCode::Esc | KeyCode::Char('n') => Some(Message::ConfirmNewCancel),
                    _ => None,
                };
            }
            Overlay::SavePrompt { .. } => {
                return match key.code {
                    KeyCode::Esc => Some(Message::SavePromptCancel),
                    KeyCode::Enter => Some(Message::SavePromptAccept),
                    KeyCode::Backspace => Some(Message::SavePromptBackspace),
                    KeyCode::Char(c)
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT) =>
                    {
                        Some(Message::SavePromptInput(c))
                    }
                    _ => None,
                };
            }
            Overlay::OpenPicker { .. } => {
                return match key.code {
                    KeyCode::Up | KeyCode::Char('k') => Some(Message::PickerUp),
                    KeyCode::Down | KeyCode::Char('j') => Some(Message::PickerDown),
                    KeyCode::Enter => Some(Message::PickerActivate),
                    KeyCode::Esc => Some(Message::PickerCancel),
                    _ => None,
                };
            }
            Overlay::None => {}
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl {
            return match key.code {
                KeyCode::Char('s') => Some(Message::RequestSave),
                KeyCode::Char('o') => Some(Message::RequestOpen),
                KeyCode::Char('n') => Some(Message::RequestNew),
                KeyCode::Char('q' | 'c') => Some(Message::Quit),
                KeyCode::Char('p') => Some(Message::TogglePreview),
                KeyCode::Char('b') => Some(Message::Edit(EditCommand::ToggleBold)),
                KeyCode::Char('i') => Some(Message::Edit(EditCommand::ToggleItalic)),
                KeyCode::Left => Some(Message::Edit(EditCommand::WordLeft)),
                KeyCode::Right => Some(Message::Edit(EditCommand::WordRight)),
                KeyCode::Home => Some(Message::Edit(EditCommand::BufferStart)),
                KeyCode::End => Some(Message::Edit(EditCommand::BufferEnd)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::Edit(EditCommand::InsertChar(c)))
            }
            KeyCode::Enter => Some(Message::Edit(EditCommand::Newline)),
            KeyCode::Backspace => Some(Message::Edit(EditCommand::Backspace)),
            KeyCode::Delete => Some(Message::Edit(EditCommand::Delete)),
            KeyCode::Tab => Some(Message::Edit(EditCommand::InsertChar('\t'))),
            KeyCode::Up => Some(Message::Edit(EditCommand::Move(Direction::Up))),
            KeyCode::Down => Some(Message::Edit(EditCommand::Move(Direction::Down))),
            KeyCode::Left => Some(Message::Edit(EditCommand::Move(Direction::Left))),
            KeyCode::Right => Some(Message::Edit(EditCommand::Move(Direction::Right))),
            KeyCode::Home => Some(Message::Edit(EditCommand::Home)),
            KeyCode::End => Some(Message::Edit(EditCommand::End)),
            KeyCode::PageUp => Some(Message::EditorScrollUp(model.editor_view_height())),
            KeyCode::PageDown => Some(Message::EditorScrollDown(model.editor_view_height())),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let area = Rect::new(0, 0, model.terminal_size.0, model.terminal_size.1);

        match &model.overlay {
            Overlay::Alert { .. } => {
                return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                    .then_some(Message::DismissAlert);
            }
            Overlay::OpenPicker {
                entries, scroll, ..
            } => {
                return Self::picker_mouse(mouse, area, entries.len(), *scroll);
            }
            Overlay::ConfirmNew | Overlay::SavePrompt { .. } => return None,
            Overlay::None => {}
        }

        let regions = layout::compute(model, area);

        if let Some(chrome_area) = regions.chrome
            && layout::point_in_rect(mouse.column, mouse.row, chrome_area)
        {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                return Some(match chrome::button_at(chrome_area, mouse.column) {
                    Some(ChromeButton::Minimize) => Message::WindowMinimize,
                    Some(ChromeButton::Maximize) => Message::WindowToggleMaximize,
                    Some(ChromeButton::Close) => Message::WindowClose,
                    None => Message::WindowDragStart,
                });
            }
            return None;
        }

        if layout::point_in_rect(mouse.column, mouse.row, regions.toolbar)
            && matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
        {
            return toolbar::action_at(regions.toolbar, mouse.column).map(|action| match action {
                ToolbarAction::Edit(cmd) => Message::Edit(cmd),
                ToolbarAction::Open => Message::RequestOpen,
                ToolbarAction::Save => Message::RequestSave,
            });
        }

        // Splitter drag.
        if let Some(splitter) = regions.splitter {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                && layout::point_in_rect(mouse.column, mouse.row, splitter)
            {
                return Some(Message::SplitDragStart);
            }
            if model.splitter_dragging {
                let content = Rect {
                    x: regions.editor.x,
                    width: regions.editor.width
                        + splitter.width
                        + regions.preview.map_or(0, |p| p.width),
                    ..regions.editor
                };
                match mouse.kind {
                    MouseEventKind::Drag(MouseButton::Left) => {
                        return Some(Message::SplitDragTo(layout::percent_for_column(
                            content,
                            mouse.column,
                        )));
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        return Some(Message::SplitDragEnd);
                    }
                    _ => {}
                }
            }
        }

        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && layout::point_in_rect(mouse.column, mouse.row, regions.editor)
            && let Some(engine) = model.bridge.engine()
        {
            let gutter = crate::ui::line_number_width(engine.line_count()) + 1;
            let line = model.editor_scroll_offset + (mouse.row - regions.editor.y) as usize;
            let screen_col = mouse
                .column
                .saturating_sub(regions.editor.x + gutter) as usize;
            let col = engine
                .line_at(line)
                .map_or(0, |text| byte_col_at_screen_col(&text, screen_col));
            return Some(Message::Edit(EditCommand::MoveTo(line, col)));
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::EditorScrollDown(3)),
            MouseEventKind::ScrollUp => Some(Message::EditorScrollUp(3)),
            _ => None,
        }
    }

    fn picker_mouse(
        mouse: MouseEvent,
        area: Rect,
        entries_len: usize,
        scroll: usize,
    ) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::ScrollDown => return Some(Message::PickerDown),
            MouseEventKind::ScrollUp => return Some(Message::PickerUp),
            MouseEventKind::Up(MouseButton::Left) => {}
            _ => return None,
        }
        let popup = crate::ui::picker_rect(area);
        if !layout::point_in_rect(mouse.column, mouse.row, popup) {
            return Some(Message::PickerCancel);
        }
        let content_top = crate::ui::picker_content_top(popup);
        if mouse.row < content_top {
            return None;
        }
        let idx = scroll + (mouse.row - content_top) as usize;
        (idx < entries_len).then_some(Message::PickerClick(idx))
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Byte offset in `line` of the character rendered at `screen_col`.
///
/// Screen columns are display cells, not bytes: multibyte characters are one
/// or two cells wide, so the click position has to be walked char by char.
fn byte_col_at_screen_col(line: &str, screen_col: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in line.char_indices() {
        if width >= screen_col {
            return idx;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::byte_col_at_screen_col;

    #[test]
    fn test_screen_column_maps_to_char_start() {
        assert_eq!(byte_col_at_screen_col("été", 0), 0);
        assert_eq!(byte_col_at_screen_col("été", 1), 2);
        assert_eq!(byte_col_at_screen_col("été", 2), 3);
        assert_eq!(byte_col_at_screen_col("été", 9), 5);
    }

    #[test]
    fn test_wide_characters_occupy_two_cells() {
        assert_eq!(byte_col_at_screen_col("あa", 2), 3);
        assert_eq!(byte_col_at_screen_col("あa", 1), 3);
    }
}
