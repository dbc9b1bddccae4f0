//! Built-in rule predicates
//!
//! Single-field predicates take a `&FieldValue`; cross-field predicates take
//! the values of every listed field, in the order they were listed.

use crate::state::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: one `@`, no whitespace, at least one dot in the domain,
/// no empty segment between dots.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

/// Fails on an empty string or an unchecked box
pub fn is_present(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => !s.is_empty(),
        FieldValue::Flag(b) => *b,
    }
}

/// Like [`is_present`], but a text value of only whitespace fails too
pub fn is_present_trimmed(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => !s.trim().is_empty(),
        FieldValue::Flag(b) => *b,
    }
}

/// Conventional `local@domain.tld` shape. Empty strings fail.
pub fn is_email(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => EMAIL_PATTERN.is_match(s),
        FieldValue::Flag(_) => false,
    }
}

/// At least `min` characters. Boolean values never satisfy a length rule.
pub fn min_length(min: usize) -> impl Fn(&FieldValue) -> bool + Send + Sync + 'static {
    move |value| match value {
        FieldValue::Text(s) => s.chars().count() >= min,
        FieldValue::Flag(_) => false,
    }
}

/// Exactly `true`
pub fn is_checked(value: &FieldValue) -> bool {
    matches!(value, FieldValue::Flag(true))
}

/// All listed values are equal. Two empty strings match; pair with
/// [`is_present`] when emptiness matters.
pub fn values_match(values: &[&FieldValue]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_is_present_trimmed() {
        assert!(is_present_trimmed(&text(" x ")));
        assert!(!is_present_trimmed(&text("   ")));
        assert!(!is_present_trimmed(&text("\t\n")));
        assert!(!is_present_trimmed(&text("")));
        assert!(!is_present_trimmed(&FieldValue::Flag(false)));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(&text("x")));
        assert!(is_present(&text(" ")));
        assert!(!is_present(&text("")));
        assert!(is_present(&FieldValue::Flag(true)));
        assert!(!is_present(&FieldValue::Flag(false)));
    }

    #[test]
    fn test_is_email_accepts_conventional_addresses() {
        assert!(is_email(&text("a@b.com")));
        assert!(is_email(&text("first.last@mail.example.org")));
        assert!(is_email(&text("x+tag@b.co")));
    }

    #[test]
    fn test_is_email_rejects_malformed() {
        for bad in [
            "", "a@b", "ab.com", "@b.com", "a@@b.com", "a@b@c.com", "a@b.", "a@.com",
            "a@b..com", "a b@c.com", "a@b.com ",
        ] {
            assert!(!is_email(&text(bad)), "{bad:?} should be rejected");
        }
        assert!(!is_email(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rule = min_length(8);
        assert!(!rule(&text("short")));
        assert!(rule(&text("longenough")));
        assert!(rule(&text("exactly8")));
        // 8 multibyte characters
        assert!(rule(&text("ääääääää")));
        assert!(!rule(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_is_checked() {
        assert!(is_checked(&FieldValue::Flag(true)));
        assert!(!is_checked(&FieldValue::Flag(false)));
        assert!(!is_checked(&text("true")));
    }

    #[test]
    fn test_values_match() {
        assert!(values_match(&[&text("abc"), &text("abc")]));
        assert!(!values_match(&[&text("abc"), &text("abd")]));
        assert!(values_match(&[&text(""), &text("")]));
        assert!(values_match(&[]));
    }
}
