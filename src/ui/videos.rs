//! Video browser: list on the left, details of the selection on the right

use super::widgets::render_scrollable_list;
use crate::api::{Video, Visibility};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    draw_tabs(frame, rows[0], app.state.visibility);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let videos = app.current_videos();
    draw_list(frame, columns[0], videos, app.state.selected_video_index);
    draw_detail(frame, columns[1], videos.get(app.state.selected_video_index));
}

fn draw_tabs(frame: &mut Frame, area: Rect, visibility: Visibility) {
    let selected = match visibility {
        Visibility::Public => 0,
        Visibility::Private => 1,
    };
    let tabs = Tabs::new([Visibility::Public.label(), Visibility::Private.label()])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_list(frame: &mut Frame, area: Rect, videos: &[Video], selected: usize) {
    let block = Block::default()
        .title(format!(" Videos ({}) ", videos.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if videos.is_empty() {
        let empty = Paragraph::new("No videos yet.\n\nPress 'u' to upload one or 'r' to refresh.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            let date = video
                .created_at
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<11}"), Style::default().fg(Color::DarkGray)),
                Span::raw(video.title.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, area, list, selected);
}

fn draw_detail(frame: &mut Frame, area: Rect, video: Option<&Video>) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(video) = video else {
        frame.render_widget(block, area);
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            video.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Visibility: ", label),
            Span::raw(video.visibility.label()),
        ]),
    ];
    if let Some(created) = video.created_at {
        lines.push(Line::from(vec![
            Span::styled("Uploaded:   ", label),
            Span::raw(created.format("%Y-%m-%d %H:%M").to_string()),
        ]));
    }
    if let Some(url) = &video.video_url {
        lines.push(Line::from(vec![
            Span::styled("Stream:     ", label),
            Span::styled(url.clone(), Style::default().fg(Color::Blue)),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(video.description.lines().map(|l| Line::from(l.to_string())));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
