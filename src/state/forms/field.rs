//! Form field value objects

use crate::validation::ErrorCode;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Render the value as bullets
    pub is_masked: bool,
    /// Set once the user edits the field or a submit is attempted
    pub touched: bool,
    /// Last error copied from a validation result
    pub error: Option<ErrorCode>,
}

impl FormField {
    fn new(name: &str, label: &str, value: FieldValue, is_masked: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
            is_masked,
            touched: false,
            error: None,
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::text_with_value(name, label, String::new())
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldValue::Text(value.into()), false)
    }

    /// Create a new masked text field (passwords)
    pub fn secret(name: &str, label: &str) -> Self {
        Self::secret_with_value(name, label, String::new())
    }

    /// Create a new masked text field with initial value
    pub fn secret_with_value(name: &str, label: &str, value: impl Into<String>) -> Self {
        Self::new(name, label, FieldValue::Text(value.into()), true)
    }

    /// Create a new unchecked checkbox
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Flag(false), false)
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Flag(_))
    }

    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the checkbox state (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Flag(b) => {
                if c == ' ' || c == 'x' {
                    *b = !*b;
                }
            }
        }
        self.touched = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
            self.touched = true;
        }
    }

    /// Flip a checkbox; no-op on text fields
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = !*b;
            self.touched = true;
        }
    }

    /// Reset value, touched flag and error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(b) => *b = false,
        }
        self.touched = false;
        self.error = None;
    }

    /// Error to show, only once the field has been touched
    pub fn visible_error(&self) -> Option<ErrorCode> {
        if self.touched {
            self.error
        } else {
            None
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_masked => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing_marks_touched() {
        let mut field = FormField::text("username", "Username");
        assert!(!field.touched);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        assert!(field.touched);
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut field = FormField::checkbox("privacyPolicy", "Privacy policy");
        assert!(field.is_checkbox());
        assert!(!field.as_flag());
        field.push_char(' ');
        assert!(field.as_flag());
        field.toggle();
        assert!(!field.as_flag());
        field.pop_char();
        assert!(!field.as_flag());
    }

    #[test]
    fn test_masked_display() {
        let field = FormField::secret_with_value("password", "Password", "hunter22");
        assert_eq!(field.display_value(), "••••••••");
        assert_eq!(field.as_text(), "hunter22");
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut field = FormField::text("email", "Email");
        field.error = Some(ErrorCode::RequiredFieldEmpty);
        assert_eq!(field.visible_error(), None);
        field.touched = true;
        assert_eq!(field.visible_error(), Some(ErrorCode::RequiredFieldEmpty));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut field = FormField::checkbox("privacyPolicy", "Privacy policy");
        field.toggle();
        field.error = Some(ErrorCode::PolicyNotAccepted);
        field.clear();
        assert!(!field.as_flag());
        assert!(!field.touched);
        assert!(field.error.is_none());
    }
}
