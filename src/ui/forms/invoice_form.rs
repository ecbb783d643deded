//! Invoice form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, CUSTOMER_NAME_FIELD, DEALER_FIELD, VEHICLE_FIELD};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the submit button while idle
pub const SUBMIT_LABEL: &str = "Download Invoice";
/// Label of the submit button while a request is outstanding
pub const GENERATING_LABEL: &str = "Generating...";

/// Hint shown in selection fields until the reference data arrives
const LOADING_HINT: &str = "Loading...";

/// Draw the invoice form
pub fn draw_invoice_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Invoice Generator ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Subtitle
            Constraint::Length(3),             // Dealer
            Constraint::Length(1),             // Dealer contact details
            Constraint::Length(3),             // Vehicle
            Constraint::Length(3),             // Customer name
            Constraint::Length(2),             // Error message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let subtitle = Paragraph::new("Create and download a professional sales invoice.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    let state = &app.state;
    let form = &state.form;
    let hint = state.is_loading().then_some(LOADING_HINT);

    let field_areas = [
        (DEALER_FIELD, chunks[1], state.dealer_options(), hint),
        (VEHICLE_FIELD, chunks[3], state.vehicle_options(), hint),
        (CUSTOMER_NAME_FIELD, chunks[4], Vec::new(), None),
    ];
    for (index, area, options, empty_hint) in field_areas {
        if let Some(field) = form.get_field(index) {
            let is_active = form.active_field() == index;
            draw_field(frame, area, field, &options, is_active, empty_hint);
        }
    }

    if let Some(details) = state.selected_dealer().and_then(|d| d.contact_details()) {
        let details = Paragraph::new(format!("  {details}"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(details, chunks[2]);
    }

    if let Some(error) = &state.error {
        let message = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[5]);
    }

    let label = if state.generating {
        GENERATING_LABEL
    } else {
        SUBMIT_LABEL
    };
    render_button(
        frame,
        chunks[6],
        label,
        form.is_submit_row_active(),
        app.can_submit(),
    );
}
