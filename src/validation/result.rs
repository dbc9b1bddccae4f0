//! Validation result model

use super::ErrorCode;
use std::collections::BTreeMap;

/// A single failing rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field the failure is reported against
    pub field_id: String,
    pub code: ErrorCode,
    /// Index of the rule in registration order
    pub rule_index: usize,
}

/// Outcome of evaluating every registered rule against a form.
///
/// `errors` holds at most one code per field (the first failure reported for
/// it). `violations` lists every failing rule in evaluation order, including
/// those whose code lost to an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, ErrorCode>,
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// True iff no field carries an error
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Error reported for a field, if any
    pub fn error(&self, field_id: &str) -> Option<ErrorCode> {
        self.errors.get(field_id).copied()
    }

    /// Per-field errors ordered by field id
    pub fn errors(&self) -> impl Iterator<Item = (&str, ErrorCode)> {
        self.errors.iter().map(|(id, code)| (id.as_str(), *code))
    }

    /// Every failing rule, in evaluation order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Record a failure. The first code recorded for a field is kept.
    pub(super) fn record(&mut self, field_id: &str, code: ErrorCode, rule_index: usize) {
        self.violations.push(Violation {
            field_id: field_id.to_string(),
            code,
            rule_index,
        });
        self.errors.entry(field_id.to_string()).or_insert(code);
    }
}
