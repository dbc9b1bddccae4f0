//! Overlays drawn over the video browser

use super::components::{centered_area, render_confirm_dialog};
use super::forms::{draw_form_fields, FIELD_HEIGHT};
use crate::app::App;
use crate::state::Overlay;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw every open overlay, bottom to top
pub fn draw(frame: &mut Frame, app: &App) {
    let menu = &app.state.menu;
    if menu.is_open(Overlay::Upload) {
        draw_upload(frame, app);
    }
    if menu.is_open(Overlay::User) {
        draw_user(frame, app);
    }
    if menu.is_open(Overlay::DeleteUser) {
        render_confirm_dialog(
            frame,
            app.state.account.as_ref().map(|a| a.username.as_str()),
            app.state.delete_confirm_selected,
        );
    }
}

fn draw_upload(frame: &mut Frame, app: &App) {
    let upload = &app.state.upload;
    // fields + button + margins + borders
    let height = upload.form.fields().len() as u16 * FIELD_HEIGHT + 3 + 4;
    let area = centered_area(frame.area(), 60, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Upload video ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    draw_form_fields(frame, inner, &upload.form, "Upload", upload.sending);
}

fn draw_user(frame: &mut Frame, app: &App) {
    let area = centered_area(frame.area(), 44, 8);
    frame.render_widget(Clear, area);

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = match &app.state.account {
        Some(account) => vec![
            Line::from(vec![Span::styled("User:  ", label), Span::raw(&account.username)]),
            Line::from(vec![Span::styled("Email: ", label), Span::raw(&account.email)]),
        ],
        None => vec![Line::from(Span::styled("Not signed up in this session", label))],
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("d", Style::default().fg(Color::Red)),
        Span::styled(" delete account", label),
    ]));

    let block = Block::default()
        .title(" Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
