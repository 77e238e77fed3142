//! Stat pill - one KPI rendered as "value label"

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Spans for a single pill: bold value, then the dim label.
pub fn pill_spans(label: &str, value: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{value} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
    ]
}

/// One line holding every pill of a module, separated by spacing.
/// Empty input yields an empty line (zero pills).
pub fn pill_line(pairs: &[(String, String)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, value)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.extend(pill_spans(label, value));
    }
    Line::from(spans)
}
