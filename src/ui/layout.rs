//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Overlay, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app name and account
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " vidboard ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(account) = &app.state.account {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("● {}", account.username),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view and overlay
fn get_view_hints(app: &App) -> String {
    match (app.state.current_view, app.state.menu.top()) {
        (View::SignUp, _) => {
            format!("Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:sign up  Esc:browse  ^C:quit")
        }
        (View::Videos, Some(Overlay::Upload)) => {
            format!("Tab:next  {SUBMIT_SHORTCUT}:upload  Esc:close")
        }
        (View::Videos, Some(Overlay::User)) => "d:delete account  Esc:close".to_string(),
        (View::Videos, Some(Overlay::DeleteUser)) => {
            "↑↓:select  Enter:confirm  Esc:cancel".to_string()
        }
        (View::Videos, None) => {
            "j/k:nav  Tab:public/private  r:refresh  u:upload  a:account  s:sign up  q:quit"
                .to_string()
        }
    }
}
