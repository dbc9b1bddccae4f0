//! Application state definitions

use super::forms::{SignUpForm, UploadForm};
use super::menu_state::MenuState;
use crate::api::Visibility;
use crate::validation::ValidationError;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignUp,
    Videos,
}

/// Account created through the sign-up form during this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub email: String,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub signup: SignUpForm,
    pub upload: UploadForm,
    pub menu: MenuState,
    /// Which list the video browser shows
    pub visibility: Visibility,
    pub selected_video_index: usize,
    pub account: Option<Account>,
    /// Delete confirmation: true when "Delete" is highlighted
    pub delete_confirm_selected: bool,
    /// Pending error messages, shown one at a time
    errors: Vec<String>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(min_password_length: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            current_view: View::default(),
            signup: SignUpForm::new(min_password_length)?,
            upload: UploadForm::new(),
            menu: MenuState::default(),
            visibility: Visibility::default(),
            selected_video_index: 0,
            account: None,
            delete_confirm_selected: false,
            errors: Vec::new(),
            status_message: None,
        })
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Move the selection within a list of `len` videos
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected_video_index = 0;
            return;
        }
        let max = len - 1;
        let current = self.selected_video_index.min(max);
        self.selected_video_index = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta as usize).min(max)
        };
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggle();
        self.selected_video_index = 0;
    }
}
