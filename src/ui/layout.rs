#![allow(dead_code)]
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Frames at least this wide always show the sidebar; narrower frames
/// only show it while the sidebar toggle is open.
pub const WIDE_VIEWPORT_COLS: u16 = 100;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub sidebar: Rect,
    pub sidebar_menu: Rect,
    pub sidebar_backend: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub hint_line: Rect,
}

/// Presentation-layer responsive rule; the sidebar flag itself is plain
/// application state and ignores the frame width.
pub fn sidebar_visible(width: u16, sidebar_open: bool) -> bool {
    width >= WIDE_VIEWPORT_COLS || sidebar_open
}

pub fn areas(size: Rect, show_sidebar: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let (sidebar, content) = if show_sidebar {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
            .split(vertical[1]);
        (main_chunks[0], main_chunks[1])
    } else {
        (Rect::default(), vertical[1])
    };

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(sidebar);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        sidebar,
        sidebar_menu: sidebar_chunks[0],
        sidebar_backend: sidebar_chunks[1],
        content,
        status_line: footer_chunks[0],
        hint_line: footer_chunks[1],
    }
}
