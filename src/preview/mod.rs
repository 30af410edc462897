//! Markdown preview rendering.
//!
//! Parses the editor's source with comrak and flattens the AST into styled
//! ratatui lines for the preview pane. Wrapping is left to the Paragraph
//! widget, so each block becomes one logical line (code blocks keep their
//! own line structure).

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render markdown source into preview lines.
pub fn render_lines(source: &str) -> Vec<Line<'static>> {
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    let root = parse_document(&arena, source, &options);

    let mut lines = Vec::new();
    for node in root.children() {
        render_block(node, 0, &mut lines);
    }
    // Trim the trailing blank separator.
    while lines.last().is_some_and(|l: &Line<'_>| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

fn render_block<'a>(node: &'a AstNode<'a>, indent: usize, out: &mut Vec<Line<'static>>) {
    let pad = "  ".repeat(indent);
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            let style = heading_style(heading.level);
            let mut spans = vec![Span::styled(pad, style)];
            spans.extend(inline_spans(node, style));
            out.push(Line::from(spans));
            out.push(Line::default());
        }
        NodeValue::Paragraph => {
            let style = Style::default();
            let mut spans = vec![Span::raw(pad)];
            spans.extend(inline_spans(node, style));
            out.push(Line::from(spans));
            out.push(Line::default());
        }
        NodeValue::CodeBlock(block) => {
            let style = Style::default().fg(Color::Green);
            for code_line in block.literal.trim_end_matches('\n').split('\n') {
                out.push(Line::from(vec![
                    Span::raw(format!("{pad}  ")),
                    Span::styled(code_line.to_string(), style),
                ]));
            }
            out.push(Line::default());
        }
        NodeValue::List(list) => {
            let mut ordinal = list.start;
            for item in node.children() {
                let marker = match list.list_type {
                    ListType::Bullet => "• ".to_string(),
                    ListType::Ordered => {
                        let m = format!("{ordinal}. ");
                        ordinal += 1;
                        m
                    }
                };
                render_list_item(item, &marker, indent, out);
            }
            out.push(Line::default());
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                let style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC);
                let mut spans = vec![Span::styled(format!("{pad}│ "), style)];
                spans.extend(inline_spans(child, style));
                out.push(Line::from(spans));
            }
            out.push(Line::default());
        }
        NodeValue::ThematicBreak => {
            out.push(Line::styled(
                "─".repeat(24),
                Style::default().fg(Color::DarkGray),
            ));
            out.push(Line::default());
        }
        NodeValue::Table(_) => {
            for row in node.children() {
                let mut cells = Vec::new();
                for cell in row.children() {
                    cells.push(
                        inline_spans(cell, Style::default())
                            .iter()
                            .map(|s| s.content.clone())
                            .collect::<String>(),
                    );
                }
                out.push(Line::from(format!("{pad}| {} |", cells.join(" | "))));
            }
            out.push(Line::default());
        }
        _ => {}
    }
}

fn render_list_item<'a>(
    item: &'a AstNode<'a>,
    marker: &str,
    indent: usize,
    out: &mut Vec<Line<'static>>,
) {
    let pad = "  ".repeat(indent);
    let mut wrote_marker = false;
    for child in item.children() {
        match &child.data.borrow().value {
            NodeValue::Paragraph => {
                let lead = if wrote_marker {
                    " ".repeat(marker.len())
                } else {
                    marker.to_string()
                };
                wrote_marker = true;
                let mut spans = vec![Span::raw(format!("{pad}{lead}"))];
                spans.extend(inline_spans(child, Style::default()));
                out.push(Line::from(spans));
            }
            NodeValue::List(_) => render_block(child, indent + 1, out),
            _ => {}
        }
    }
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Blue,
        _ => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Flatten a block node's inline children into styled spans.
fn inline_spans<'a>(node: &'a AstNode<'a>, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    collect_inline(node, base, &mut spans);
    spans
}

fn collect_inline<'a>(node: &'a AstNode<'a>, style: Style, spans: &mut Vec<Span<'static>>) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => spans.push(Span::styled(text.clone(), style)),
            NodeValue::Code(code) => spans.push(Span::styled(
                code.literal.clone(),
                style.fg(Color::Green),
            )),
            NodeValue::Emph => {
                collect_inline(child, style.add_modifier(Modifier::ITALIC), spans);
            }
            NodeValue::Strong => {
                collect_inline(child, style.add_modifier(Modifier::BOLD), spans);
            }
            NodeValue::Strikethrough => {
                collect_inline(child, style.add_modifier(Modifier::CROSSED_OUT), spans);
            }
            NodeValue::Link(link) => {
                let link_style = style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
                if child.children().next().is_some() {
                    collect_inline(child, link_style, spans);
                } else {
                    spans.push(Span::styled(link.url.clone(), link_style));
                }
            }
            NodeValue::SoftBreak | NodeValue::LineBreak => {
                spans.push(Span::styled(" ".to_string(), style));
            }
            _ => collect_inline(child, style, spans),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn test_heading_is_bold_styled() {
        let lines = render_lines("# Title");
        assert_eq!(line_text(&lines[0]), "Title");
        assert!(
            lines[0]
                .spans
                .iter()
                .any(|s| s.style.add_modifier.contains(Modifier::BOLD))
        );
    }

    #[test]
    fn test_paragraph_inline_emphasis() {
        let lines = render_lines("plain **bold** and *lean*");
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "bold")
            .expect("bold span");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let lean = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "lean")
            .expect("italic span");
        assert!(lean.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_bullet_list_markers() {
        let lines = render_lines("- one\n- two");
        assert_eq!(line_text(&lines[0]), "• one");
        assert_eq!(line_text(&lines[1]), "• two");
    }

    #[test]
    fn test_ordered_list_numbers_from_start() {
        let lines = render_lines("3. third\n4. fourth");
        assert_eq!(line_text(&lines[0]), "3. third");
        assert_eq!(line_text(&lines[1]), "4. fourth");
    }

    #[test]
    fn test_code_block_keeps_line_structure() {
        let lines = render_lines("```\nlet a = 1;\nlet b = 2;\n```");
        assert_eq!(line_text(&lines[0]), "  let a = 1;");
        assert_eq!(line_text(&lines[1]), "  let b = 2;");
    }

    #[test]
    fn test_table_rows_render_as_pipe_lines() {
        let lines = render_lines("| a | b |\n| --- | --- |\n| 1 | 2 |");
        assert_eq!(line_text(&lines[0]), "| a | b |");
        assert_eq!(line_text(&lines[1]), "| 1 | 2 |");
    }

    #[test]
    fn test_empty_source_renders_nothing() {
        assert!(render_lines("").is_empty());
    }
}
