//! Edit commands dispatched into the engine.
//!
//! Every toolbar button and editing keystroke reduces to one
//! [`EditCommand`]; [`apply`] is the single entry point that mutates the
//! buffer.

use super::buffer::{Direction, TextBuffer};

/// All commands the engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    // Primitive edits
    InsertChar(char),
    Backspace,
    Delete,
    Newline,
    // Cursor movement
    Move(Direction),
    Home,
    End,
    WordLeft,
    WordRight,
    BufferStart,
    BufferEnd,
    MoveTo(usize, usize),
    // Formatting
    ToggleBold,
    ToggleItalic,
    Heading(u8),
    BulletList,
    OrderedList,
    InsertTable,
}

/// Apply a command to the buffer.
pub fn apply(buffer: &mut TextBuffer, cmd: EditCommand) {
    match cmd {
        EditCommand::InsertChar(ch) => buffer.insert_char(ch),
        EditCommand::Backspace => {
            buffer.delete_back();
        }
        EditCommand::Delete => {
            buffer.delete_forward();
        }
        EditCommand::Newline => buffer.split_line(),
        EditCommand::Move(dir) => buffer.move_cursor(dir),
        EditCommand::Home => buffer.move_home(),
        EditCommand::End => buffer.move_end(),
        EditCommand::WordLeft => buffer.move_word_left(),
        EditCommand::WordRight => buffer.move_word_right(),
        EditCommand::BufferStart => buffer.move_to_start(),
        EditCommand::BufferEnd => buffer.move_to_end(),
        EditCommand::MoveTo(line, col) => buffer.move_to(line, col),
        EditCommand::ToggleBold => toggle_inline_mark(buffer, "**"),
        EditCommand::ToggleItalic => toggle_inline_mark(buffer, "*"),
        EditCommand::Heading(level) => toggle_heading(buffer, level),
        EditCommand::BulletList => toggle_list_prefix(buffer, "- "),
        EditCommand::OrderedList => toggle_list_prefix(buffer, "1. "),
        EditCommand::InsertTable => insert_table(buffer),
    }
}

/// Wrap or unwrap the word under the cursor with an emphasis marker.
///
/// With no word at the cursor, inserts an empty marker pair and leaves the
/// cursor between the markers.
fn toggle_inline_mark(buffer: &mut TextBuffer, mark: &str) {
    let cursor = buffer.cursor();
    let Some(line) = buffer.line_at(cursor.line) else {
        return;
    };

    let Some((start, end)) = buffer.word_bounds_at_cursor() else {
        buffer.insert_str(&format!("{mark}{mark}"));
        let after = buffer.cursor();
        buffer.move_to(after.line, after.col - mark.len());
        return;
    };

    let wrapped = line[..start].ends_with(mark) && line[end..].starts_with(mark);
    // `*` must not match the inner edge of an existing `**`.
    let wider = mark == "*"
        && (line[..start].ends_with("**") || line[end..].starts_with("**"));

    if wrapped && !wider {
        let new_line = format!(
            "{}{}{}",
            &line[..start - mark.len()],
            &line[start..end],
            &line[end + mark.len()..]
        );
        buffer.replace_line(cursor.line, &new_line);
        buffer.move_to(cursor.line, cursor.col.saturating_sub(mark.len()).max(start - mark.len()));
    } else {
        let new_line = format!(
            "{}{mark}{}{mark}{}",
            &line[..start],
            &line[start..end],
            &line[end..]
        );
        buffer.replace_line(cursor.line, &new_line);
        buffer.move_to(cursor.line, cursor.col + mark.len());
    }
}

/// Set the current line to the given heading level, or strip the prefix
/// when it is already at that level.
fn toggle_heading(buffer: &mut TextBuffer, level: u8) {
    let level = usize::from(level.clamp(1, 6));
    let cursor = buffer.cursor();
    let Some(line) = buffer.line_at(cursor.line) else {
        return;
    };

    let existing = line.chars().take_while(|&c| c == '#').count();
    let body = line[existing..].trim_start();
    let new_line = if existing == level {
        body.to_string()
    } else {
        format!("{} {}", "#".repeat(level), body)
    };
    buffer.replace_line(cursor.line, &new_line);
    let delta = new_line.len() as isize - line.len() as isize;
    buffer.move_to(cursor.line, cursor.col.saturating_add_signed(delta));
}

/// Toggle a list prefix on the current line, replacing any existing list
/// prefix of the other kind.
fn toggle_list_prefix(buffer: &mut TextBuffer, prefix: &str) {
    let cursor = buffer.cursor();
    let Some(line) = buffer.line_at(cursor.line) else {
        return;
    };

    let stripped = strip_list_prefix(&line);
    let had_same = line.len() - stripped.len() > 0 && line.starts_with(prefix);
    let new_line = if had_same {
        stripped.to_string()
    } else {
        format!("{prefix}{stripped}")
    };
    buffer.replace_line(cursor.line, &new_line);
    let delta = new_line.len() as isize - line.len() as isize;
    let col = cursor.col.saturating_add_signed(delta);
    buffer.move_to(cursor.line, col);
}

/// Strip a leading `- `, `* `, or `N. ` list marker.
fn strip_list_prefix(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest;
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix(". ") {
            return rest;
        }
    }
    line
}

/// Insert an empty GFM table below the current line.
fn insert_table(buffer: &mut TextBuffer) {
    let line = buffer.cursor().line;
    buffer.insert_line_below(
        line,
        "|  |  |\n| --- | --- |\n|  |  |",
    );
    // Place the cursor inside the first header cell.
    buffer.move_to(line + 1, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf_with_cursor(text: &str, line: usize, col: usize) -> TextBuffer {
        let mut buf = TextBuffer::from_text(text);
        buf.move_to(line, col);
        buf
    }

    #[test]
    fn test_bold_wraps_word_under_cursor() {
        let mut buf = buf_with_cursor("make this bold", 0, 11);
        apply(&mut buf, EditCommand::ToggleBold);
        assert_eq!(buf.line_at(0), Some("make this **bold**".to_string()));
    }

    #[test]
    fn test_bold_unwraps_already_bold_word() {
        let mut buf = buf_with_cursor("a **word** b", 0, 5);
        apply(&mut buf, EditCommand::ToggleBold);
        assert_eq!(buf.line_at(0), Some("a word b".to_string()));
    }

    #[test]
    fn test_bold_without_word_inserts_empty_pair() {
        let mut buf = TextBuffer::empty();
        apply(&mut buf, EditCommand::ToggleBold);
        assert_eq!(buf.line_at(0), Some("****".to_string()));
        assert_eq!(buf.cursor().col, 2);
    }

    #[test]
    fn test_italic_wraps_word() {
        let mut buf = buf_with_cursor("lean in", 0, 1);
        apply(&mut buf, EditCommand::ToggleItalic);
        assert_eq!(buf.line_at(0), Some("*lean* in".to_string()));
    }

    #[test]
    fn test_italic_does_not_unwrap_bold() {
        let mut buf = buf_with_cursor("**word**", 0, 4);
        apply(&mut buf, EditCommand::ToggleItalic);
        assert_eq!(buf.line_at(0), Some("***word***".to_string()));
    }

    #[test]
    fn test_heading_adds_prefix() {
        let mut buf = buf_with_cursor("Title", 0, 0);
        apply(&mut buf, EditCommand::Heading(2));
        assert_eq!(buf.line_at(0), Some("## Title".to_string()));
        assert_eq!(buf.cursor().col, 3);
    }

    #[test]
    fn test_heading_demote_shortens_prefix() {
        let mut buf = buf_with_cursor("#### Title", 0, 8);
        apply(&mut buf, EditCommand::Heading(1));
        assert_eq!(buf.line_at(0), Some("# Title".to_string()));
        assert_eq!(buf.cursor().col, 5);
    }

    #[test]
    fn test_heading_replaces_existing_level() {
        let mut buf = buf_with_cursor("# Title", 0, 0);
        apply(&mut buf, EditCommand::Heading(3));
        assert_eq!(buf.line_at(0), Some("### Title".to_string()));
    }

    #[test]
    fn test_heading_same_level_toggles_off() {
        let mut buf = buf_with_cursor("## Title", 0, 0);
        apply(&mut buf, EditCommand::Heading(2));
        assert_eq!(buf.line_at(0), Some("Title".to_string()));
    }

    #[test]
    fn test_bullet_list_toggles() {
        let mut buf = buf_with_cursor("item", 0, 0);
        apply(&mut buf, EditCommand::BulletList);
        assert_eq!(buf.line_at(0), Some("- item".to_string()));
        apply(&mut buf, EditCommand::BulletList);
        assert_eq!(buf.line_at(0), Some("item".to_string()));
    }

    #[test]
    fn test_ordered_list_replaces_bullet() {
        let mut buf = buf_with_cursor("- item", 0, 0);
        apply(&mut buf, EditCommand::OrderedList);
        assert_eq!(buf.line_at(0), Some("1. item".to_string()));
    }

    #[test]
    fn test_insert_table_adds_skeleton_below() {
        let mut buf = buf_with_cursor("above", 0, 3);
        apply(&mut buf, EditCommand::InsertTable);
        assert_eq!(buf.line_at(0), Some("above".to_string()));
        assert_eq!(buf.line_at(1), Some("|  |  |".to_string()));
        assert_eq!(buf.line_at(2), Some("| --- | --- |".to_string()));
        assert_eq!(buf.line_at(3), Some("|  |  |".to_string()));
        assert_eq!(buf.cursor().line, 1);
    }

    #[test]
    fn test_primitive_edits_route_through_apply() {
        let mut buf = TextBuffer::empty();
        apply(&mut buf, EditCommand::InsertChar('h'));
        apply(&mut buf, EditCommand::InsertChar('i'));
        apply(&mut buf, EditCommand::Newline);
        apply(&mut buf, EditCommand::InsertChar('!'));
        apply(&mut buf, EditCommand::Backspace);
        assert_eq!(buf.text(), "hi\n");
    }
}
