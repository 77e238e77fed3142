use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, LoadState, StatusLevel, ERROR_HINT};
use crate::domain::ModuleRecord;
use self::widgets::card::render_card;
use self::widgets::pill::pill_line;

/// Outer height of one module card, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Outer height of one highlight tile in the detail panel.
const HIGHLIGHT_TILE_HEIGHT: u16 = 3;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let show_sidebar = layout::sidebar_visible(size.width, app.sidebar_open);
    let areas = layout::areas(size, show_sidebar);

    draw_header(f, areas.header, app);
    if show_sidebar {
        draw_sidebar(f, areas.sidebar_menu, areas.sidebar_backend, app);
    }
    draw_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);
    draw_hint_line(f, areas.hint_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Pulse",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Radiology · Patient Flow · Reporting",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled("Backend", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.backend_url)),
    ]);

    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let (state_word, state_color) = match app.load {
        LoadState::Loading => ("loading", Color::Yellow),
        LoadState::Ready => ("connected", Color::LightGreen),
        LoadState::Failed(_) => ("offline", Color::LightRed),
    };
    let right_line = Line::from(vec![
        Span::styled("State ", Style::default().fg(Color::DarkGray)),
        Span::styled(state_word, Style::default().fg(state_color)),
        Span::raw("  "),
        Span::styled("Modules ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.modules.len().to_string()),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, menu_area: Rect, backend_area: Rect, app: &App) {
    let items: Vec<ListItem> = if app.modules.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "(no modules)",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.modules
            .iter()
            .map(|module| {
                let is_active = module.id == app.active;
                let style = if is_active {
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", module.kind().icon())),
                    Span::styled(module.title.clone(), style),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(app.modules.iter().position(|m| m.id == app.active));
    f.render_stateful_widget(list, menu_area, &mut state);

    let backend = Paragraph::new(Text::from(vec![Line::from(Span::styled(
        app.backend_url.clone(),
        Style::default().fg(Color::Gray),
    ))]))
    .block(Block::default().borders(Borders::ALL).title("Backend"))
    .wrap(Wrap { trim: true });
    f.render_widget(backend, backend_area);
}

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    match &app.load {
        LoadState::Loading => draw_loading(f, area, app),
        LoadState::Failed(message) => draw_error(f, area, message),
        LoadState::Ready => draw_ready(f, area, app),
    }
}

fn draw_loading(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let line = Line::from(vec![
        Span::styled(app.spinner_frame(), Style::default().fg(Color::LightCyan)),
        Span::raw(" Loading dashboard data…"),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ERROR_HINT,
            Style::default().fg(Color::Red),
        )),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);
}

fn draw_ready(f: &mut Frame, area: Rect, app: &App) {
    let zones = content_zones(app, area);

    for (rect, module) in zones.overview.iter().zip(app.overview_modules()) {
        render_card(f, *rect, module, module.id == app.active);
    }

    if let (Some(detail_area), Some(module)) = (zones.detail, app.active_module()) {
        draw_detail(f, detail_area, module);
    }

    for (rect, module) in zones.remaining.iter().zip(app.remaining_modules()) {
        render_card(f, *rect, module, module.id == app.active);
    }
}

fn draw_detail(f: &mut Frame, area: Rect, module: &ModuleRecord) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::raw(format!(" {} ", module.kind().icon())),
            Span::styled(
                module.title.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        module.description.clone(),
        Style::default().fg(Color::Gray),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[0]);

    let kpis = module.kpi_pairs();
    if !kpis.is_empty() {
        f.render_widget(Paragraph::new(pill_line(&kpis)), chunks[1]);
    }

    if !module.highlights.is_empty() {
        let tiles = grid(chunks[2], module.highlights.len(), 3, HIGHLIGHT_TILE_HEIGHT);
        for (rect, highlight) in tiles.iter().zip(&module.highlights) {
            let tile = Paragraph::new(Line::from(highlight.clone()))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(tile, *rect);
        }
    }

    let action = Paragraph::new(Line::from(Span::styled(
        format!("Action placeholder for \"{}\"", module.title),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(action, chunks[3]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled("Backend ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.backend_url)),
        Span::styled("Active ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.active.clone()),
    ];

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_hint_line(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
            StatusLevel::Error => Color::LightRed,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        Line::from(Span::styled(
            "j/k select  1-9 jump  s sidebar  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(52, 50, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  j / k      Next / previous module"),
        Line::from("  Up / Down  Next / previous module"),
        Line::from("  1-9        Jump to module"),
        Line::from("  Mouse      Click cards and menu entries"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  s          Toggle sidebar (narrow screens)"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

/// Card and panel rectangles of the loaded content region. Computed the
/// same way for drawing and for mouse hit-testing, so clicks always land
/// on the card that was rendered there.
#[derive(Debug, Clone, Default)]
pub struct ContentZones {
    pub overview: Vec<Rect>,
    pub detail: Option<Rect>,
    pub remaining: Vec<Rect>,
}

pub fn content_zones(app: &App, area: Rect) -> ContentZones {
    let overview_count = app.overview_modules().len();
    let remaining_count = app.remaining_modules().len();
    let has_detail = app.active_module().is_some();

    let overview_rows = rows_for(overview_count, 2);
    let remaining_rows = rows_for(remaining_count, 3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(overview_rows * CARD_HEIGHT),
            if has_detail {
                Constraint::Min(9)
            } else {
                Constraint::Length(0)
            },
            Constraint::Length(remaining_rows * CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    ContentZones {
        overview: grid(chunks[0], overview_count, 2, CARD_HEIGHT),
        detail: has_detail.then_some(chunks[1]),
        remaining: grid(chunks[2], remaining_count, 3, CARD_HEIGHT),
    }
}

fn rows_for(count: usize, columns: usize) -> u16 {
    count.div_ceil(columns) as u16
}

/// Split an area into a row-major grid of equally wide cells.
fn grid(area: Rect, count: usize, columns: usize, cell_height: u16) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }

    let rows = rows_for(count, columns);
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(cell_height); rows as usize])
        .split(area);

    let mut cells = Vec::with_capacity(count);
    let percent = (100 / columns) as u16;
    for row_chunk in row_chunks.iter() {
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(percent); columns])
            .split(*row_chunk);
        for col_chunk in col_chunks.iter() {
            if cells.len() == count {
                return cells;
            }
            cells.push(*col_chunk);
        }
    }
    cells
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
