//! Form rendering module
//!
//! - `field_renderer`: single field with its validation message
//! - `signup_form`: the sign-up view and the shared field/button stack

mod field_renderer;
mod signup_form;

pub use field_renderer::FIELD_HEIGHT;
pub use signup_form::{draw_form_fields, draw_signup};
