//! Form domain layer
//!
//! Field values, the ordered form container and the two concrete forms
//! (sign-up and video upload) with their validation rules.

mod field;
mod form_state;
pub mod signup_form;
pub mod upload_form;

pub use field::{FieldValue, FormField};
pub use form_state::FormState;
pub use signup_form::SignUpForm;
pub use upload_form::UploadForm;
