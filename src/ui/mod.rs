//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod overlays;
mod videos;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::SignUp => forms::draw_signup(frame, main_area, app),
        View::Videos => {
            videos::draw(frame, main_area, app);
            if app.state.menu.any_open() {
                overlays::draw(frame, app);
            }
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog is modal and drawn last
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_count());
    }
}
