//! Application state and core logic

use crate::api::{ApiClient, ApiClientTrait, DataManager};
use crate::config::AppConfig;
use crate::state::{Account, AppState, FormState, Overlay, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// What a key did to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormKey {
    Edited,
    Moved,
    Submit,
    Cancel,
    Ignored,
}

/// Shared key handling for the sign-up and upload forms
fn handle_form_key(form: &mut FormState, key: KeyEvent) -> FormKey {
    let on_buttons_row = form.is_buttons_row_active();

    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
            FormKey::Submit
        }
        KeyCode::Esc => FormKey::Cancel,
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            FormKey::Moved
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            FormKey::Moved
        }
        KeyCode::Enter if on_buttons_row => FormKey::Submit,
        KeyCode::Enter => {
            if let Some(field) = form.get_active_field_mut() {
                if field.is_checkbox() {
                    field.toggle();
                    return FormKey::Edited;
                }
            }
            form.next_field();
            FormKey::Moved
        }
        KeyCode::Char(c) if !on_buttons_row => match form.get_active_field_mut() {
            Some(field) => {
                field.push_char(c);
                FormKey::Edited
            }
            None => FormKey::Ignored,
        },
        KeyCode::Backspace if !on_buttons_row => match form.get_active_field_mut() {
            Some(field) => {
                field.pop_char();
                FormKey::Edited
            }
            None => FormKey::Ignored,
        },
        _ => FormKey::Ignored,
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Video lists and the API client behind them
    pub data: DataManager,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the configured API
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let base_url = config.base_url();
        tracing::info!("using API at {base_url}");
        let client = ApiClient::new(&base_url, config.request_timeout())?;
        Self::with_client(Box::new(client), config.min_password_length())
    }

    /// Create an App around any API client implementation
    pub fn with_client(client: Box<dyn ApiClientTrait>, min_password_length: usize) -> Result<Self> {
        Ok(Self {
            state: AppState::new(min_password_length)?,
            data: DataManager::new(client),
            quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message);
    }

    /// Videos of the list currently shown
    pub fn current_videos(&self) -> &[crate::api::Video] {
        self.data.videos(self.state.visibility)
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::SignUp => self.handle_signup_key(key).await?,
            View::Videos => match self.state.menu.top() {
                Some(Overlay::DeleteUser) => self.handle_delete_user_key(key).await?,
                Some(Overlay::User) => self.handle_user_overlay_key(key),
                Some(Overlay::Upload) => self.handle_upload_key(key).await?,
                None => self.handle_videos_key(key).await?,
            },
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.menu.close_all();
        self.state.current_view = view;
    }

    async fn handle_signup_key(&mut self, key: KeyEvent) -> Result<()> {
        match handle_form_key(&mut self.state.signup.form, key) {
            FormKey::Edited => self.state.signup.refresh_errors(),
            FormKey::Submit => self.submit_signup().await,
            FormKey::Cancel => {
                // Browse without registering
                self.navigate(View::Videos);
                self.load_videos().await;
            }
            FormKey::Moved | FormKey::Ignored => {}
        }
        Ok(())
    }

    /// Validate the sign-up form and, if it passes, register the user
    async fn submit_signup(&mut self) {
        if self.state.signup.sending {
            return;
        }
        if !self.state.signup.check_submit() {
            self.state.status_message = Some("Please fix the highlighted fields".to_string());
            return;
        }

        self.state.signup.begin_send();
        let registration = self.state.signup.registration();
        match self.data.client().register_user(&registration).await {
            Ok(()) => {
                self.state.signup.finish_send(true);
                tracing::info!("registered user {}", registration.username);
                self.state.account = Some(Account {
                    username: registration.username,
                    email: registration.email,
                });
                self.state.status_message =
                    Some("Registration successful! Check your inbox to confirm.".to_string());
                self.navigate(View::Videos);
                self.load_videos().await;
            }
            Err(err) => {
                tracing::error!("registration failed: {err}");
                self.state.signup.finish_send(false);
                let message = match err.status_code() {
                    Some(400) => format!("Registration rejected: {err}"),
                    _ => format!("Registration failed: {err}"),
                };
                self.push_error(message);
            }
        }
    }

    /// Refresh both video lists
    pub async fn load_videos(&mut self) {
        let public_ok = self.data.get_public_videos().await;
        let private_ok = self.data.get_private_videos().await;
        if !(public_ok && private_ok) {
            self.state.status_message = Some("Could not load all videos".to_string());
        }
        let len = self.current_videos().len();
        self.state.move_selection(0, len);
    }

    async fn handle_videos_key(&mut self, key: KeyEvent) -> Result<()> {
        let len = self.current_videos().len();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection(-1, len),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection(1, len),
            KeyCode::Tab => {
                self.state.toggle_visibility();
                self.state.status_message =
                    Some(format!("Showing {} videos", self.state.visibility.as_str()));
            }
            KeyCode::Char('r') => {
                self.load_videos().await;
            }
            KeyCode::Char('u') => self.state.menu.open(Overlay::Upload),
            KeyCode::Char('a') => self.state.menu.open(Overlay::User),
            KeyCode::Char('s') => {
                self.state.signup.form.active_field_index = 0;
                self.navigate(View::SignUp);
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_upload_key(&mut self, key: KeyEvent) -> Result<()> {
        match handle_form_key(&mut self.state.upload.form, key) {
            FormKey::Edited => self.state.upload.refresh_errors(),
            FormKey::Submit => self.submit_upload().await,
            FormKey::Cancel => self.state.menu.close(Overlay::Upload),
            FormKey::Moved | FormKey::Ignored => {}
        }
        Ok(())
    }

    async fn submit_upload(&mut self) {
        if self.state.upload.sending || !self.state.upload.check_submit() {
            return;
        }

        self.state.upload.sending = true;
        let upload = self.state.upload.upload();
        let result = self.data.upload_video(&upload).await;
        self.state.upload.sending = false;

        match result {
            Ok(()) => {
                self.state.upload.form.reset();
                self.state.menu.close(Overlay::Upload);
                self.state.status_message = Some(format!("Uploaded \"{}\"", upload.title));
                self.load_videos().await;
            }
            Err(err) => {
                tracing::error!("upload failed: {err}");
                self.push_error(format!("Upload failed: {err}"));
            }
        }
    }

    fn handle_user_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.menu.close(Overlay::User),
            KeyCode::Char('a') => self.state.menu.toggle(Overlay::User),
            KeyCode::Char('d') => {
                self.state.delete_confirm_selected = false;
                self.state.menu.open(Overlay::DeleteUser);
            }
            _ => {}
        }
    }

    async fn handle_delete_user_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.state.menu.close(Overlay::DeleteUser),
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                self.state.delete_confirm_selected = !self.state.delete_confirm_selected;
            }
            KeyCode::Enter if !self.state.delete_confirm_selected => {
                self.state.menu.close(Overlay::DeleteUser);
            }
            KeyCode::Enter => self.delete_user().await,
            _ => {}
        }
        Ok(())
    }

    async fn delete_user(&mut self) {
        match self.data.client().delete_user().await {
            Ok(()) => {
                tracing::info!("user account deleted");
                self.state.account = None;
                self.state.signup.form.reset();
                self.state.signup.finish_send(false);
                self.state.status_message = Some("Account deleted".to_string());
                self.navigate(View::SignUp);
            }
            Err(err) => {
                tracing::error!("account deletion failed: {err}");
                self.state.menu.close(Overlay::DeleteUser);
                self.push_error(format!("Could not delete account: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockApiClientTrait, Video, Visibility};
    use crate::state::signup_form::{
        EMAIL, MIN_PASSWORD_LENGTH, PASSWORD, PASSWORD_REPEAT, PRIVACY_POLICY, USERNAME,
    };
    use crate::validation::ErrorCode;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(mock: MockApiClientTrait) -> App {
        App::with_client(Box::new(mock), MIN_PASSWORD_LENGTH).unwrap()
    }

    fn fill_signup(app: &mut App) {
        let form = &mut app.state.signup.form;
        form.set_text(USERNAME, "alice");
        form.set_text(EMAIL, "alice@example.com");
        form.set_text(PASSWORD, "correcthorse");
        form.set_text(PASSWORD_REPEAT, "correcthorse");
        form.set_flag(PRIVACY_POLICY, true);
    }

    fn expect_empty_lists(mock: &mut MockApiClientTrait) {
        mock.expect_list_videos().returning(|_| Ok(Vec::<Video>::new()));
    }

    #[tokio::test]
    async fn test_invalid_signup_never_calls_api() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_register_user().times(0);
        let mut app = app(mock);

        app.submit_signup().await;

        assert_eq!(app.state.current_view, View::SignUp);
        assert!(app.state.signup.form.fields().iter().all(|f| f.touched));
        assert_eq!(
            app.state.signup.form.field(EMAIL).unwrap().visible_error(),
            Some(ErrorCode::RequiredFieldEmpty)
        );
        assert!(!app.state.signup.sending);
    }

    #[tokio::test]
    async fn test_valid_signup_registers_and_opens_videos() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_register_user()
            .withf(|r| r.username == "alice" && r.password_repeat == "correcthorse")
            .times(1)
            .returning(|_| Ok(()));
        expect_empty_lists(&mut mock);

        let mut app = app(mock);
        fill_signup(&mut app);
        app.submit_signup().await;

        assert!(app.state.signup.send_successful);
        assert!(!app.state.signup.sending);
        assert_eq!(app.state.current_view, View::Videos);
        assert_eq!(
            app.state.account.as_ref().map(|a| a.email.as_str()),
            Some("alice@example.com")
        );
    }

    #[tokio::test]
    async fn test_failed_signup_surfaces_error() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_register_user()
            .times(1)
            .returning(|_| Err(ApiError::http(400, "email taken")));

        let mut app = app(mock);
        fill_signup(&mut app);
        app.submit_signup().await;

        assert_eq!(app.state.current_view, View::SignUp);
        assert!(!app.state.signup.sending);
        assert!(!app.state.signup.send_successful);
        assert!(app.state.current_error().unwrap().contains("email taken"));

        // Error dialog swallows keys until dismissed
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(app.state.signup.form.text(USERNAME), "alice");
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_typing_updates_active_field_and_errors() {
        let mut app = app(MockApiClientTrait::new());
        app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('o'))).await.unwrap();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        app.handle_key(key(KeyCode::Char('x'))).await.unwrap();

        let form = &app.state.signup.form;
        assert_eq!(form.text(USERNAME), "bo");
        assert_eq!(form.text(EMAIL), "x");
        assert_eq!(
            form.field(EMAIL).unwrap().visible_error(),
            Some(ErrorCode::InvalidEmailFormat)
        );
        // Untouched fields stay quiet
        assert_eq!(form.field(PASSWORD).unwrap().visible_error(), None);
    }

    #[tokio::test]
    async fn test_enter_toggles_policy_checkbox() {
        let mut app = app(MockApiClientTrait::new());
        app.state.signup.form.active_field_index = 4;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(app.state.signup.form.field(PRIVACY_POLICY).unwrap().as_flag());
    }

    #[tokio::test]
    async fn test_escape_browses_without_account() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_list_videos()
            .returning(|v| Err(ApiError::http(503, format!("{} unavailable", v.as_str()))));
        let mut app = app(mock);

        app.handle_key(key(KeyCode::Esc)).await.unwrap();

        assert_eq!(app.state.current_view, View::Videos);
        assert!(app.current_videos().is_empty());
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Could not load all videos")
        );
    }

    #[tokio::test]
    async fn test_overlay_keys() {
        let mut app = app(MockApiClientTrait::new());
        app.navigate(View::Videos);

        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
        assert_eq!(app.state.menu.top(), Some(Overlay::User));
        app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
        assert_eq!(app.state.menu.top(), Some(Overlay::DeleteUser));

        // Cancel is highlighted first
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.menu.top(), Some(Overlay::User));
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.menu.any_open());

        app.handle_key(key(KeyCode::Char('u'))).await.unwrap();
        assert_eq!(app.state.menu.top(), Some(Overlay::Upload));
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.menu.any_open());
    }

    #[tokio::test]
    async fn test_delete_user_confirmed() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_delete_user().times(1).returning(|| Ok(()));
        let mut app = app(mock);
        app.state.account = Some(Account {
            username: "alice".into(),
            email: "alice@example.com".into(),
        });
        app.navigate(View::Videos);
        app.state.menu.open(Overlay::User);
        app.state.menu.open(Overlay::DeleteUser);

        app.handle_key(key(KeyCode::Down)).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();

        assert!(app.state.account.is_none());
        assert_eq!(app.state.current_view, View::SignUp);
        assert!(!app.state.menu.any_open());
    }

    #[tokio::test]
    async fn test_invalid_upload_stays_open() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_upload_video().times(0);
        let mut app = app(mock);
        app.navigate(View::Videos);
        app.state.menu.open(Overlay::Upload);

        app.submit_upload().await;

        assert_eq!(app.state.menu.top(), Some(Overlay::Upload));
        assert!(app.state.upload.form.fields().iter().all(|f| f.touched));
    }

    #[tokio::test]
    async fn test_successful_upload_closes_overlay_and_refreshes() {
        let mut mock = MockApiClientTrait::new();
        mock.expect_upload_video()
            .withf(|u| u.title == "Clip" && u.visibility == Visibility::Public)
            .times(1)
            .returning(|_| Ok(()));
        mock.expect_list_videos().times(2).returning(|v| {
            Ok(vec![Video {
                id: 1,
                title: "Clip".into(),
                description: "d".into(),
                visibility: v,
                video_url: None,
                thumbnail_url: None,
                created_at: None,
            }])
        });

        let mut app = app(mock);
        app.navigate(View::Videos);
        app.state.menu.open(Overlay::Upload);
        let form = &mut app.state.upload.form;
        form.set_text("title", "Clip");
        form.set_text("description", "d");
        form.set_text("file", "/tmp/clip.mp4");

        app.submit_upload().await;

        assert!(!app.state.menu.any_open());
        assert_eq!(app.state.upload.form.text("title"), "");
        assert_eq!(app.current_videos().len(), 1);
    }

    #[tokio::test]
    async fn test_tab_switches_lists() {
        let mut app = app(MockApiClientTrait::new());
        app.navigate(View::Videos);
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(app.state.visibility, Visibility::Private);
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }
}
