//! Form validation engine
//!
//! Rules are registered once when a form is built and evaluated against a
//! [`FormState`](crate::state::FormState) snapshot every time the form is
//! checked. Evaluation never fails: problems with the snapshot itself (a rule
//! naming a field that isn't there) come back as [`ErrorCode::FieldMissing`].
//!
//! ```ignore
//! let mut engine = ValidationEngine::new();
//! engine
//!     .register_field_rule("email", rules::is_present, ErrorCode::RequiredFieldEmpty)
//!     .register_field_rule("email", rules::is_email, ErrorCode::InvalidEmailFormat);
//! engine.register_cross_field_rule(
//!     &["password", "passwordRepeat"],
//!     rules::values_match,
//!     ErrorCode::PasswordMismatch,
//! )?;
//!
//! if !engine.is_valid(&form) {
//!     form.mark_all_touched();
//! }
//! ```

mod engine;
mod error_code;
mod result;
pub mod rules;

pub use engine::{ValidationEngine, ValidationError};
pub use error_code::ErrorCode;
pub use result::ValidationResult;
