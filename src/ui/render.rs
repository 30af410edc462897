use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Wrap};

use crate::app::Model;

use super::{chrome, layout, overlays, status, toolbar};

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let regions = layout::compute(model, area);

    if let Some(chrome_area) = regions.chrome {
        chrome::render_title_bar(model, frame, chrome_area);
    }
    toolbar::render_toolbar(model, frame, regions.toolbar);

    render_editor_pane(model, frame, regions.editor);
    if let Some(splitter) = regions.splitter {
        render_splitter(model, frame, splitter);
    }
    if let Some(preview) = regions.preview {
        render_preview_pane(model, frame, preview);
    }

    if let Some(toast_area) = regions.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, regions.status);

    overlays::render_overlay(model, frame, area);
}

fn render_editor_pane(model: &mut Model, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let Some(engine) = model.bridge.engine() else {
        // Not-ready: a document has not been mounted yet.
        let placeholder = Paragraph::new(Line::styled(
            "loading document…",
            Style::default().fg(Color::Indexed(245)),
        ))
        .centered();
        let mid = Rect {
            y: area.y + area.height / 2,
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(placeholder, mid);
        return;
    };

    let total_lines = engine.line_count();
    let gutter_width = line_number_width(total_lines);

    let visible_height = area.height as usize;
    let start = model.editor_scroll_offset.min(total_lines.saturating_sub(1));
    let end = (start + visible_height).min(total_lines);
    let cursor = engine.cursor();

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let line_text = engine.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);

        let mut spans = vec![Span::styled(line_num, Style::default().fg(Color::DarkGray))];

        if line_idx == cursor.line {
            // Split line at cursor position for cursor rendering. The split
            // must land on char boundaries or slicing panics on multibyte
            // text.
            let mut col = cursor.col.min(line_text.len());
            while col > 0 && !line_text.is_char_boundary(col) {
                col -= 1;
            }
            let cursor_len = line_text[col..].chars().next().map_or(0, char::len_utf8);
            let before = &line_text[..col];
            let cursor_char = if cursor_len == 0 {
                " "
            } else {
                &line_text[col..col + cursor_len]
            };
            let after = &line_text[col + cursor_len..];

            if !before.is_empty() {
                spans.push(Span::raw(before.to_string()));
            }
            spans.push(Span::styled(
                cursor_char.to_string(),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after.to_string()));
            }
        } else {
            spans.push(Span::raw(line_text));
        }

        content.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_splitter(model: &Model, frame: &mut Frame, area: Rect) {
    let style = if model.splitter_dragging {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Indexed(240))
    };
    let bars: Vec<Line> = (0..area.height).map(|_| Line::styled("│", style)).collect();
    frame.render_widget(Paragraph::new(bars), area);
}

fn render_preview_pane(model: &Model, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let source = model.bridge.content().unwrap_or_default();
    let lines = crate::preview::render_lines(&source);
    let max_scroll = lines.len().saturating_sub(area.height as usize);
    let scroll = model.editor_scroll_offset.min(max_scroll) as u16;
    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(preview, area);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
