//! Rule registry and evaluation

use super::{ErrorCode, ValidationResult};
use crate::state::{FieldValue, FormState};

/// Predicate over a single field value
type FieldPredicate = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Predicate over several field values, in listed order
type CrossFieldPredicate = Box<dyn Fn(&[&FieldValue]) -> bool + Send + Sync>;

/// Errors raised while building an engine
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cross-field rule for {0} must name at least one field")]
    EmptyFieldList(ErrorCode),
}

enum Check {
    Field(FieldPredicate),
    CrossField(CrossFieldPredicate),
}

struct Rule {
    /// First entry is the field failures are reported against
    field_ids: Vec<String>,
    check: Check,
    code: ErrorCode,
}

/// Ordered set of immutable rules evaluated against a form snapshot
#[derive(Default)]
pub struct ValidationEngine {
    rules: Vec<Rule>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Attach a rule to a single field
    pub fn register_field_rule<F>(
        &mut self,
        field_id: impl Into<String>,
        predicate: F,
        code: ErrorCode,
    ) -> &mut Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            field_ids: vec![field_id.into()],
            check: Check::Field(Box::new(predicate)),
            code,
        });
        self
    }

    /// Attach a rule spanning several fields. Failures are reported against
    /// the first listed field.
    pub fn register_cross_field_rule<F>(
        &mut self,
        field_ids: &[&str],
        predicate: F,
        code: ErrorCode,
    ) -> Result<&mut Self, ValidationError>
    where
        F: Fn(&[&FieldValue]) -> bool + Send + Sync + 'static,
    {
        if field_ids.is_empty() {
            return Err(ValidationError::EmptyFieldList(code));
        }
        self.rules.push(Rule {
            field_ids: field_ids.iter().map(|id| id.to_string()).collect(),
            check: Check::CrossField(Box::new(predicate)),
            code,
        });
        Ok(self)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule in registration order and collect the failures.
    ///
    /// A rule whose fields are not all present in `form` is not run; it
    /// reports [`ErrorCode::FieldMissing`] against its primary field.
    pub fn evaluate(&self, form: &FormState) -> ValidationResult {
        let mut result = ValidationResult::default();

        for (index, rule) in self.rules.iter().enumerate() {
            let mut values = Vec::with_capacity(rule.field_ids.len());
            let mut missing = None;
            for id in &rule.field_ids {
                match form.value(id) {
                    Some(value) => values.push(value),
                    None => {
                        missing = Some(id.as_str());
                        break;
                    }
                }
            }

            if let Some(id) = missing {
                tracing::debug!("rule {index} references missing field {id:?}");
                result.record(&rule.field_ids[0], ErrorCode::FieldMissing, index);
                continue;
            }

            let passed = match &rule.check {
                Check::Field(predicate) => predicate(values[0]),
                Check::CrossField(predicate) => predicate(&values),
            };
            if !passed {
                result.record(&rule.field_ids[0], rule.code, index);
            }
        }

        result
    }

    /// True iff [`evaluate`](Self::evaluate) reports nothing
    #[allow(dead_code)]
    pub fn is_valid(&self, form: &FormState) -> bool {
        self.evaluate(form).is_valid()
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rules.len())
            .finish()
    }
}
