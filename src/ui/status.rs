use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let name = model.document_name();
    let dirty_indicator = if model.editor_is_dirty() {
        " [modified]"
    } else {
        ""
    };

    let cursor_info = model.bridge.engine().map_or_else(
        || "  loading".to_string(),
        |engine| {
            let c = engine.cursor();
            format!("  Ln {}, Col {}", c.line + 1, c.col + 1)
        },
    );

    let preview_indicator = if model.preview_visible {
        " [preview]"
    } else {
        ""
    };

    let status = format!(
        " {name}{dirty_indicator}{cursor_info}{preview_indicator}  ^S save  ^O open  ^N new  ^Q quit"
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
