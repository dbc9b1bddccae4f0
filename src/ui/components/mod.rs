//! Reusable UI components

mod button;
mod dialog;

pub use button::render_button;
pub use dialog::{centered_area, render_confirm_dialog, render_error_dialog};
