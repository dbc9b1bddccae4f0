//! Sign-up form rendering

use super::field_renderer::{draw_field, draw_submit_button, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Maximum width of the form column
const FORM_WIDTH: u16 = 60;

/// Draw the sign-up form centered in the content area
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let signup = &app.state.signup;
    let form_area = centered_column(area, FORM_WIDTH);

    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    draw_form_fields(frame, inner, &signup.form, "Sign up", signup.sending);
}

/// Lay out every field followed by the submit button
pub fn draw_form_fields(frame: &mut Frame, area: Rect, form: &FormState, submit_label: &str, busy: bool) {
    let mut constraints: Vec<Constraint> = form
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(3)); // Submit button
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (idx, field) in form.fields().iter().enumerate() {
        draw_field(frame, chunks[idx], field, form.active_field_index == idx);
    }

    let button_idx = form.fields().len();
    draw_submit_button(
        frame,
        chunks[button_idx],
        submit_label,
        form.is_buttons_row_active(),
        busy,
    );
}

/// Horizontally centered column no wider than `width`
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
