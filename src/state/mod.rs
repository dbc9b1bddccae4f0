//! Application state module

mod app_state;
mod forms;
mod menu_state;

pub use app_state::*;
pub use forms::*;
pub use menu_state::*;
