//! Confirmation dialog for deleting the account

use super::base::centered_area;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the delete-account confirmation; `delete_selected` highlights
/// "Delete" instead of "Cancel"
pub fn render_confirm_dialog(frame: &mut Frame, username: Option<&str>, delete_selected: bool) {
    let dialog_area = centered_area(frame.area(), 50, 10);
    frame.render_widget(Clear, dialog_area);

    let subject = username.map_or_else(|| "this account".to_string(), |u| format!("\"{u}\""));

    let mut content = vec![
        Line::from(Span::styled(
            "Delete account",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Permanently delete {subject}?")),
        Line::from(""),
    ];

    for (is_delete, label, color) in [(false, "Cancel", Color::White), (true, "Delete", Color::Red)] {
        let is_selected = delete_selected == is_delete;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}
