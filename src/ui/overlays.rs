use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::{Model, Overlay};

pub fn render_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    match &model.overlay {
        Overlay::None => {}
        Overlay::Alert { message } => render_alert(message, frame, area),
        Overlay::ConfirmNew => render_confirm_new(frame, area),
        Overlay::SavePrompt { input } => render_save_prompt(input, frame, area),
        Overlay::OpenPicker {
            dir,
            entries,
            selected,
            scroll,
        } => render_open_picker(model, dir, entries, *selected, *scroll, frame, area),
    }
}

pub fn picker_rect(area: Rect) -> Rect {
    let popup_width = area.width.saturating_sub(16).max(44);
    let popup_height = area.height.saturating_sub(6).max(10);
    centered_popup_rect(popup_width, popup_height, area)
}

pub const fn picker_content_top(popup: Rect) -> u16 {
    // 1 row for border + 1 row for padding
    popup.y + 2
}

fn render_alert(message: &str, frame: &mut Frame, area: Rect) {
    let width = (message.chars().count() as u16 + 8).clamp(30, area.width.saturating_sub(4));
    let popup = centered_popup_rect(width, 5, area);

    let lines = vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("Enter/Esc dismisses", Style::default().fg(Color::Indexed(245))),
    ];

    let block = Block::default()
        .title("inkpad")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_confirm_new(frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(48, 5, area);
    let lines = vec![
        Line::raw("Create new file? Unsaved changes will be lost."),
        Line::raw(""),
        Line::styled(
            "Enter/y confirms · Esc/n cancels",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    let block = Block::default()
        .title("New Document")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_save_prompt(input: &str, frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(52, 6, area);
    let lines = vec![
        Line::raw("Save as (.md is appended if missing):"),
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        Line::raw(""),
        Line::styled(
            "Enter saves · Esc cancels",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    let block = Block::default()
        .title("Save Document")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[allow(clippy::too_many_arguments)]
fn render_open_picker(
    _model: &Model,
    dir: &std::path::Path,
    entries: &[crate::app::PickerEntry],
    selected: usize,
    scroll: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let popup = picker_rect(area);
    // Border + padding rows top and bottom, plus one footer line.
    let visible_rows = popup.height.saturating_sub(5) as usize;
    let max_start = entries.len().saturating_sub(visible_rows);
    let start = scroll.min(max_start);
    let end = (start + visible_rows).min(entries.len());

    let mut lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|(i, entry)| {
            let marker = if i == selected { ">" } else { " " };
            let display_name = if entry.is_dir && entry.name != ".." {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };
            let style = if entry.is_dir {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let style = if i == selected {
                style.reversed()
            } else {
                style
            };
            Line::styled(format!("{marker} {display_name}"), style)
        })
        .collect();
    if entries.is_empty() {
        lines.push(Line::styled(
            "(no markdown files here)",
            Style::default().fg(Color::Indexed(245)),
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "↑/↓ move · Enter opens · Esc cancels",
        Style::default().fg(Color::Indexed(245)),
    ));

    let title = dir.file_name().map_or_else(
        || dir.display().to_string(),
        |n| n.to_string_lossy().to_string(),
    );
    let block = Block::default()
        .title(format!("Open — {title}"))
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
