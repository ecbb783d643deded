//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
///
/// `options` are the labels of a selection field (ignored for text fields).
/// `empty_hint` replaces the field's placeholder while it has no value,
/// e.g. "Loading..." before the options arrive.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    options: &[String],
    is_active: bool,
    empty_hint: Option<&str>,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.display_value(options);
    let (text, text_style) = if value.is_empty() {
        (
            empty_hint.unwrap_or(&field.placeholder).to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_active {
        (value, Style::default().fg(Color::Cyan))
    } else {
        (value, Style::default())
    };

    let mut spans = Vec::new();
    if field.is_selection() {
        let arrow_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("◀ ", arrow_style));
        spans.push(Span::styled(text, text_style));
        spans.push(Span::styled(" ▶", arrow_style));
    } else {
        spans.push(Span::styled(text, text_style));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
