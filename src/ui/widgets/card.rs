//! Module card - one clickable tile in the overview/remainder grids

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::domain::ModuleRecord;

use super::pill::pill_line;

/// Render one module card. Visual state is purely derived from
/// `is_active`; selection itself happens in the input layer.
pub fn render_card(f: &mut Frame, area: Rect, module: &ModuleRecord, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_active {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::raw(format!(" {} ", module.kind().icon())),
            Span::styled(module.title.clone(), title_style),
            Span::raw(" "),
        ]));

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let mut lines = vec![Line::from(Span::styled(
        truncate_text(&module.description, inner_width * 2),
        Style::default().fg(Color::Gray),
    ))];

    let kpis = module.kpi_pairs();
    if !kpis.is_empty() {
        lines.push(Line::from(""));
        lines.push(pill_line(&kpis));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Clip long descriptions so a card never overflows its two text rows.
pub fn truncate_text(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max).collect::<String>() + "…"
}
