//! Title bar with window controls.
//!
//! Rendered only when the host exposes a controllable window; otherwise the
//! row is simply absent (see [`layout::compute`](super::layout::compute)).

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

/// Width of one control cell in the title bar.
const BUTTON_WIDTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeButton {
    Minimize,
    Maximize,
    Close,
}

pub fn render_title_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let base = Style::default().bg(Color::Indexed(236)).fg(Color::White);
    frame.render_widget(Paragraph::new("").style(base), area);

    let title = format!(" inkpad — {}{}", model.document_name(), dirty_suffix(model));
    frame.render_widget(
        Paragraph::new(title).style(base.add_modifier(Modifier::BOLD)),
        Rect {
            width: area.width.saturating_sub(BUTTON_WIDTH * 3),
            ..area
        },
    );

    let maximize_glyph = if model.is_maximized { "❐" } else { "□" };
    let controls = [("─", base), (maximize_glyph, base), ("✕", base.fg(Color::LightRed))];
    for (idx, (glyph, style)) in controls.iter().enumerate() {
        let x = area.x + area.width.saturating_sub(BUTTON_WIDTH * (3 - idx as u16));
        let cell = Rect {
            x,
            width: BUTTON_WIDTH.min(area.width),
            ..area
        };
        frame.render_widget(Paragraph::new(format!(" {glyph} ")).style(*style), cell);
    }
}

/// Which control a click on the title bar hits, if any.
///
/// Anything left of the controls is the drag region.
pub fn button_at(area: Rect, col: u16) -> Option<ChromeButton> {
    if col < area.x || col >= area.x + area.width {
        return None;
    }
    let from_right = area.x + area.width - 1 - col;
    match from_right / BUTTON_WIDTH {
        0 => Some(ChromeButton::Close),
        1 => Some(ChromeButton::Maximize),
        2 => Some(ChromeButton::Minimize),
        _ => None,
    }
}

fn dirty_suffix(model: &Model) -> &'static str {
    if model.editor_is_dirty() { " •" } else { "" }
}
