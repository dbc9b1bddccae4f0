//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the oldest pending error centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, pending: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::styled("Enter", key_style),
        Span::raw("/"),
        Span::styled("Esc", key_style),
        Span::raw(" dismiss"),
    ];
    if pending > 1 {
        hint.push(Span::styled(
            format!("  ({} more)", pending - 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
