//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod error_dialog;

pub use base::centered_area;
pub use confirm_dialog::render_confirm_dialog;
pub use error_dialog::render_error_dialog;
