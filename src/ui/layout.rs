//! Layout components (form column, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::LoadStatus;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column is allowed to grow
const FORM_MAX_WIDTH: u16 = 72;
/// Rows the form needs: borders, margins, subtitle, fields, details, error, button
const FORM_HEIGHT: u16 = 21;

/// Create the main layout: a centered form column above a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [column] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[0]);
    let [form] = Layout::vertical([Constraint::Max(FORM_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);

    (form, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Backend status
    let conn_status = match app.state.load_status {
        LoadStatus::Loaded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        LoadStatus::Loading => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        LoadStatus::Failed => Span::styled(" ○ ", Style::default().fg(Color::Red)),
    };
    spans.push(conn_status);

    // Last status message goes first so long hints never hide it
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled(key_hints(), Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the form
fn key_hints() -> String {
    format!("Tab:next  ←/→:choose  Enter:select  {SUBMIT_SHORTCUT}:download  Esc:quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let area = Rect::new(0, 0, 100, 40);
        let (form, status) = create_layout(area);
        assert_eq!(status, Rect::new(0, 39, 100, 1));
        assert_eq!(form.width, FORM_MAX_WIDTH);
        assert_eq!(form.height, FORM_HEIGHT);
        // Centered horizontally
        assert_eq!(form.x, (100 - FORM_MAX_WIDTH) / 2);
    }

    #[test]
    fn test_layout_shrinks_on_small_terminal() {
        let area = Rect::new(0, 0, 40, 12);
        let (form, status) = create_layout(area);
        assert_eq!(status.y, 11);
        assert_eq!(form.width, 40);
        assert_eq!(form.height, 11);
    }

    #[test]
    fn test_key_hints_mention_submit_shortcut() {
        assert!(key_hints().contains(SUBMIT_SHORTCUT));
    }
}
