//! Form state container

use super::field::{FieldValue, FormField};
use crate::validation::ValidationResult;

/// Ordered set of fields plus keyboard focus.
///
/// Focus positions run over every field and then one extra position for the
/// submit button row.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[allow(dead_code)]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of a field, `None` if the form has no such field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).map(|f| &f.value)
    }

    /// Text value of a field (empty for unknown fields and checkboxes)
    pub fn text(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or("")
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Text(value.into());
            field.touched = true;
        }
    }

    #[allow(dead_code)]
    pub fn set_flag(&mut self, name: &str, value: bool) {
        if let Some(field) = self.field_mut(name) {
            field.value = FieldValue::Flag(value);
            field.touched = true;
        }
    }

    /// Number of focus positions (fields + button row)
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index >= self.fields.len()
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    /// Force every field to show its error
    pub fn mark_all_touched(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    /// Copy per-field errors from a validation result onto the fields
    pub fn apply_result(&mut self, result: &ValidationResult) {
        for field in &mut self.fields {
            field.error = result.error(&field.name);
        }
    }

    /// Clear all values and return focus to the first field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}
