//! Sign-up form: fields, rules and submission flags

use super::field::FormField;
use super::form_state::FormState;
use crate::api::Registration;
use crate::validation::{rules, ErrorCode, ValidationEngine, ValidationError, ValidationResult};

pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const PASSWORD_REPEAT: &str = "passwordRepeat";
pub const PRIVACY_POLICY: &str = "privacyPolicy";

/// Default minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug)]
pub struct SignUpForm {
    pub form: FormState,
    engine: ValidationEngine,
    /// A registration request is in flight
    pub sending: bool,
    /// The last registration request succeeded
    pub send_successful: bool,
}

impl SignUpForm {
    pub fn new(min_password_length: usize) -> Result<Self, ValidationError> {
        let form = FormState::new(vec![
            FormField::text(USERNAME, "Username"),
            FormField::text(EMAIL, "Email"),
            FormField::secret(PASSWORD, "Password"),
            FormField::secret(PASSWORD_REPEAT, "Repeat password"),
            FormField::checkbox(PRIVACY_POLICY, "I accept the privacy policy"),
        ]);

        let mut engine = ValidationEngine::new();
        engine
            .register_field_rule(USERNAME, rules::is_present, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(EMAIL, rules::is_present, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(EMAIL, rules::is_email, ErrorCode::InvalidEmailFormat)
            .register_field_rule(PASSWORD, rules::is_present, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(
                PASSWORD,
                rules::min_length(min_password_length),
                ErrorCode::PasswordTooShort,
            )
            .register_field_rule(PASSWORD_REPEAT, rules::is_present, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(PRIVACY_POLICY, rules::is_checked, ErrorCode::PolicyNotAccepted);
        engine.register_cross_field_rule(
            &[PASSWORD, PASSWORD_REPEAT],
            rules::values_match,
            ErrorCode::PasswordMismatch,
        )?;
        tracing::debug!("sign-up form built with {} rules", engine.rule_count());

        Ok(Self {
            form,
            engine,
            sending: false,
            send_successful: false,
        })
    }

    pub fn evaluate(&self) -> ValidationResult {
        self.engine.evaluate(&self.form)
    }

    /// Re-run the rules and copy errors onto the fields without touching them
    pub fn refresh_errors(&mut self) {
        let result = self.evaluate();
        self.form.apply_result(&result);
    }

    /// Submission gate. On failure every field is marked touched so its error
    /// becomes visible.
    pub fn check_submit(&mut self) -> bool {
        let result = self.evaluate();
        self.form.apply_result(&result);
        if !result.is_valid() {
            let fields: Vec<String> = result
                .errors()
                .map(|(id, code)| format!("{id}={code}"))
                .collect();
            tracing::debug!(
                "sign-up rejected on {} fields: {} ({} violations)",
                result.len(),
                fields.join(", "),
                result.violations().len()
            );
            self.form.mark_all_touched();
        }
        result.is_valid()
    }

    /// Payload for the registration endpoint
    pub fn registration(&self) -> Registration {
        Registration {
            username: self.form.text(USERNAME).to_string(),
            email: self.form.text(EMAIL).to_string(),
            password: self.form.text(PASSWORD).to_string(),
            password_repeat: self.form.text(PASSWORD_REPEAT).to_string(),
        }
    }

    pub fn begin_send(&mut self) {
        self.sending = true;
        self.send_successful = false;
    }

    pub fn finish_send(&mut self, success: bool) {
        self.sending = false;
        self.send_successful = success;
    }
}
