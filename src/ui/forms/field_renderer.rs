//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus an error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field and, once it has been touched, its validation error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let error = field.visible_error();
    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let content = if field.is_checkbox() {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(), text_style),
            Span::raw(" "),
            Span::styled(&field.label, Style::default().fg(Color::Gray)),
        ]))
    } else {
        let display_value = field.display_value();
        let display_str = if display_value.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            display_value
        };
        let cursor = if is_active { "▌" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if !field.is_checkbox() {
        block = block.title(format!(" {} ", field.label));
    }

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(code) = error {
        let message = Paragraph::new(Span::styled(
            format!(" {}", code.message()),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw the submit button row
pub fn draw_submit_button(frame: &mut Frame, area: Rect, label: &str, is_active: bool, busy: bool) {
    let label = if busy { "Sending…" } else { label };
    crate::ui::components::render_button(frame, area, label, is_active, !busy);
}
