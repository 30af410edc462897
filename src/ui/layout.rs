//! Frame region computation.
//!
//! One function computes every region of the frame so that rendering and
//! mouse hit-testing can never disagree about where things are.

use ratatui::layout::Rect;

use crate::app::Model;

use super::{CHROME_HEIGHT, MIN_PANE_PERCENT, TOOLBAR_HEIGHT};

/// Resolved screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Title bar row. `None` when the host has no window to control.
    pub chrome: Option<Rect>,
    pub toolbar: Rect,
    pub editor: Rect,
    /// One-column divider between the panes.
    pub splitter: Option<Rect>,
    pub preview: Option<Rect>,
    pub toast: Option<Rect>,
    pub status: Rect,
}

pub fn compute(model: &Model, area: Rect) -> FrameLayout {
    let chrome_rows = if model.chrome_active() {
        CHROME_HEIGHT
    } else {
        0
    };
    let toast_rows = u16::from(model.active_toast().is_some());

    let chrome = (chrome_rows > 0).then(|| Rect {
        height: CHROME_HEIGHT,
        ..area
    });
    let toolbar = Rect {
        y: area.y + chrome_rows,
        height: TOOLBAR_HEIGHT.min(area.height.saturating_sub(chrome_rows)),
        ..area
    };
    let status = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    let toast = (toast_rows > 0).then(|| Rect {
        y: area.y + area.height.saturating_sub(2),
        height: 1,
        ..area
    });

    let content_top = toolbar.y + toolbar.height;
    let content = Rect {
        y: content_top,
        height: area
            .height
            .saturating_sub(chrome_rows + TOOLBAR_HEIGHT + 1 + toast_rows),
        ..area
    };

    // Too narrow to show two panes: the editor wins.
    if !model.preview_visible || content.width < 10 {
        return FrameLayout {
            chrome,
            toolbar,
            editor: content,
            splitter: None,
            preview: None,
            toast,
            status,
        };
    }

    let pct = clamp_split_percent(model.split_percent);
    let editor_width = (u32::from(content.width) * u32::from(pct) / 100) as u16;
    let editor = Rect {
        width: editor_width,
        ..content
    };
    let splitter = Rect {
        x: content.x + editor_width,
        width: 1.min(content.width.saturating_sub(editor_width)),
        ..content
    };
    let preview = Rect {
        x: splitter.x + splitter.width,
        width: content
            .width
            .saturating_sub(editor_width + splitter.width),
        ..content
    };

    FrameLayout {
        chrome,
        toolbar,
        editor,
        splitter: Some(splitter),
        preview: Some(preview),
        toast,
        status,
    }
}

/// Keep both panes at or above the minimum share.
pub fn clamp_split_percent(pct: u16) -> u16 {
    pct.clamp(MIN_PANE_PERCENT, 100 - MIN_PANE_PERCENT)
}

/// Splitter percentage that would put the divider at `col`.
pub fn percent_for_column(content: Rect, col: u16) -> u16 {
    if content.width == 0 {
        return super::DEFAULT_SPLIT_PERCENT;
    }
    let rel = col.saturating_sub(content.x);
    let pct = (u32::from(rel) * 100 / u32::from(content.width)) as u16;
    clamp_split_percent(pct)
}

pub fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
