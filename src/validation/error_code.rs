//! Validation error codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a rule rejected a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    RequiredFieldEmpty,
    InvalidEmailFormat,
    PasswordTooShort,
    PasswordMismatch,
    PolicyNotAccepted,
    /// Reserved: a rule referenced a field the form does not have
    FieldMissing,
}

impl ErrorCode {
    /// Stable identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredFieldEmpty => "required-field-empty",
            Self::InvalidEmailFormat => "invalid-email-format",
            Self::PasswordTooShort => "password-too-short",
            Self::PasswordMismatch => "password-mismatch",
            Self::PolicyNotAccepted => "policy-not-accepted",
            Self::FieldMissing => "field-missing",
        }
    }

    /// Message shown under the offending input
    pub fn message(&self) -> &'static str {
        match self {
            Self::RequiredFieldEmpty => "This field is required",
            Self::InvalidEmailFormat => "Please enter a valid email address",
            Self::PasswordTooShort => "Password is too short",
            Self::PasswordMismatch => "Passwords do not match",
            Self::PolicyNotAccepted => "Please accept the privacy policy",
            Self::FieldMissing => "Field is missing from the form",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_form_matches_as_str() {
        let codes = [
            ErrorCode::RequiredFieldEmpty,
            ErrorCode::InvalidEmailFormat,
            ErrorCode::PasswordTooShort,
            ErrorCode::PasswordMismatch,
            ErrorCode::PolicyNotAccepted,
            ErrorCode::FieldMissing,
        ];
        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_field_missing_identifier() {
        assert_eq!(ErrorCode::FieldMissing.to_string(), "field-missing");
        let parsed: ErrorCode = serde_json::from_str("\"field-missing\"").unwrap();
        assert_eq!(parsed, ErrorCode::FieldMissing);
    }
}
