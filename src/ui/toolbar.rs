//! Formatting and file command strip.
//!
//! The toolbar holds no state of its own: every button resolves to a
//! [`ToolbarAction`] and the shell decides what (if anything) happens.
//! Buttons render dimmed when their action would be dropped, but clicks
//! are still reported; the no-op lives in one place, not here.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::engine::EditCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Edit(EditCommand),
    Open,
    Save,
}

const FORMAT_BUTTONS: [(&str, EditCommand); 8] = [
    ("B", EditCommand::ToggleBold),
    ("I", EditCommand::ToggleItalic),
    ("H1", EditCommand::Heading(1)),
    ("H2", EditCommand::Heading(2)),
    ("H3", EditCommand::Heading(3)),
    ("•", EditCommand::BulletList),
    ("1.", EditCommand::OrderedList),
    ("⊞", EditCommand::InsertTable),
];

const FILE_BUTTONS: [(&str, ToolbarAction); 2] =
    [("Open", ToolbarAction::Open), ("Save", ToolbarAction::Save)];

/// Screen column ranges occupied by each button, in render order.
fn button_cells() -> Vec<(std::ops::Range<u16>, ToolbarAction)> {
    let mut cells = Vec::new();
    let mut x: u16 = 0;
    for (label, cmd) in FORMAT_BUTTONS {
        let w = cell_width(label);
        cells.push((x..x + w, ToolbarAction::Edit(cmd)));
        x += w + 1;
    }
    // Separator between formatting and file groups.
    x += 2;
    for (label, action) in FILE_BUTTONS {
        let w = cell_width(label);
        cells.push((x..x + w, action));
        x += w + 1;
    }
    cells
}

fn cell_width(label: &str) -> u16 {
    // One padding space on each side of the label.
    (label.width() as u16) + 2
}

/// The action under screen column `col`, relative to the toolbar's left edge.
pub fn action_at(area: Rect, col: u16) -> Option<ToolbarAction> {
    let rel = col.checked_sub(area.x)?;
    button_cells()
        .into_iter()
        .find(|(range, _)| range.contains(&rel))
        .map(|(_, action)| action)
}

pub fn render_toolbar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar = Style::default().bg(Color::Indexed(238)).fg(Color::White);
    let active = bar.add_modifier(Modifier::BOLD);
    let dimmed = bar.fg(Color::Indexed(244));

    let edit_style = if model.bridge.is_mounted() {
        active
    } else {
        dimmed
    };
    let file_style = if model.caps.files { active } else { dimmed };

    let mut spans = Vec::new();
    for (label, _) in FORMAT_BUTTONS {
        spans.push(Span::styled(format!(" {label} "), edit_style));
        spans.push(Span::styled(" ", bar));
    }
    spans.push(Span::styled("│ ", bar.fg(Color::Indexed(244))));
    for (label, _) in FILE_BUTTONS {
        spans.push(Span::styled(format!(" {label} "), file_style));
        spans.push(Span::styled(" ", bar));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_button_is_bold() {
        let area = Rect::new(0, 0, 80, 1);
        assert_eq!(
            action_at(area, 1),
            Some(ToolbarAction::Edit(EditCommand::ToggleBold))
        );
    }

    #[test]
    fn test_gap_between_buttons_hits_nothing() {
        let area = Rect::new(0, 0, 80, 1);
        // First gap sits right after the 3-cell bold button.
        assert_eq!(action_at(area, 3), None);
    }

    #[test]
    fn test_save_button_is_last() {
        let area = Rect::new(0, 0, 80, 1);
        let cells = button_cells();
        let (range, action) = cells.last().unwrap().clone();
        assert_eq!(action, ToolbarAction::Save);
        assert_eq!(action_at(area, range.start), Some(ToolbarAction::Save));
    }

    #[test]
    fn test_click_left_of_toolbar_area_hits_nothing() {
        let area = Rect::new(5, 0, 80, 1);
        assert_eq!(action_at(area, 2), None);
    }
}
