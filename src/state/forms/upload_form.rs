//! Video upload form shown in the upload overlay

use super::field::FormField;
use super::form_state::FormState;
use crate::api::{VideoUpload, Visibility};
use crate::validation::{rules, ErrorCode, ValidationEngine};
use std::path::PathBuf;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const FILE: &str = "file";
pub const PRIVATE: &str = "private";

#[derive(Debug)]
pub struct UploadForm {
    pub form: FormState,
    engine: ValidationEngine,
    pub sending: bool,
}

impl UploadForm {
    pub fn new() -> Self {
        let form = FormState::new(vec![
            FormField::text(TITLE, "Title"),
            FormField::text(DESCRIPTION, "Description"),
            FormField::text(FILE, "Video file path"),
            FormField::checkbox(PRIVATE, "Private"),
        ]);

        let mut engine = ValidationEngine::new();
        engine
            .register_field_rule(TITLE, rules::is_present_trimmed, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(DESCRIPTION, rules::is_present, ErrorCode::RequiredFieldEmpty)
            .register_field_rule(FILE, rules::is_present_trimmed, ErrorCode::RequiredFieldEmpty);

        Self {
            form,
            engine,
            sending: false,
        }
    }

    pub fn refresh_errors(&mut self) {
        let result = self.engine.evaluate(&self.form);
        self.form.apply_result(&result);
    }

    /// Submission gate, same contract as the sign-up form
    pub fn check_submit(&mut self) -> bool {
        let result = self.engine.evaluate(&self.form);
        self.form.apply_result(&result);
        if !result.is_valid() {
            self.form.mark_all_touched();
        }
        result.is_valid()
    }

    pub fn upload(&self) -> VideoUpload {
        let visibility = match self.form.field(PRIVATE) {
            Some(f) if f.as_flag() => Visibility::Private,
            _ => Visibility::Public,
        };
        VideoUpload {
            title: self.form.text(TITLE).trim().to_string(),
            description: self.form.text(DESCRIPTION).to_string(),
            file_path: PathBuf::from(self.form.text(FILE).trim()),
            visibility,
        }
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_upload_is_rejected() {
        let mut form = UploadForm::new();
        assert!(!form.check_submit());
        assert_eq!(
            form.form.field(FILE).unwrap().visible_error(),
            Some(ErrorCode::RequiredFieldEmpty)
        );
        // The visibility checkbox has no rule
        assert_eq!(form.form.field(PRIVATE).unwrap().error, None);
    }

    #[test]
    fn test_blank_title_and_path_are_rejected() {
        let mut form = UploadForm::new();
        form.form.set_text(TITLE, "   ");
        form.form.set_text(DESCRIPTION, "d");
        form.form.set_text(FILE, " \t");
        assert!(!form.check_submit());
        assert_eq!(
            form.form.field(TITLE).unwrap().visible_error(),
            Some(ErrorCode::RequiredFieldEmpty)
        );
        assert_eq!(
            form.form.field(FILE).unwrap().visible_error(),
            Some(ErrorCode::RequiredFieldEmpty)
        );
        assert_eq!(form.form.field(DESCRIPTION).unwrap().error, None);
    }

    #[test]
    fn test_upload_payload() {
        let mut form = UploadForm::new();
        form.form.set_text(TITLE, " Holiday ");
        form.form.set_text(DESCRIPTION, "Beach");
        form.form.set_text(FILE, "/tmp/beach.mp4");
        form.form.set_flag(PRIVATE, true);
        assert!(form.check_submit());

        let upload = form.upload();
        assert_eq!(upload.title, "Holiday");
        assert_eq!(upload.file_path, PathBuf::from("/tmp/beach.mp4"));
        assert_eq!(upload.visibility, Visibility::Private);
    }
}
