//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::services::{AppsScriptClient, EnhanceService, GeminiClient, SubmitService};
use crate::state::{
    is_zip_candidate, truncate_chars, AppState, BusinessForm, EnhanceStatus, Field, SubmitStatus,
    View, MAX_DESCRIPTION_CHARS,
};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the description rewrite service
    enhance: Box<dyn EnhanceService>,
    /// Client for the intake endpoint
    submit: Box<dyn SubmitService>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the real services
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        let enhance = GeminiClient::new(
            http.clone(),
            config.resolved_api_key(),
            config.gemini_model.clone(),
        );
        let submit = AppsScriptClient::new(http, config.endpoint_url.clone());

        Ok(Self {
            state: AppState::default(),
            enhance: Box::new(enhance),
            submit: Box::new(submit),
            quit: false,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_services(
        enhance: Box<dyn EnhanceService>,
        submit: Box<dyn SubmitService>,
    ) -> Self {
        Self {
            state: AppState::default(),
            enhance,
            submit,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message onto the modal dialog queue
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Expire transient UI state; called once per event-loop tick
    pub fn update_transients(&mut self) {
        self.state.expire_ai_hint();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key).await,
            View::Success => {
                self.handle_success_key(key);
                Ok(())
            }
        }
    }

    /// Handle keys in the registration form view
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons_row = self.state.form.is_buttons_row_active();
        let chord = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere in the form)
            KeyCode::Char('s') if chord => self.submit_form().await,
            KeyCode::Char('e') if chord => self.enhance_description().await,
            // Buttons row navigation and activation
            KeyCode::Left | KeyCode::Right if on_buttons_row => {
                self.state.form.next_button();
            }
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                0 => self.enhance_description().await,
                _ => self.submit_form().await,
            },
            // Enter attaches the archive when the path field is active,
            // and adds a newline inside the description
            KeyCode::Enter if self.state.form.active_field() == Some(Field::ZipPath) => {
                self.attach_zip().await;
            }
            KeyCode::Enter => self.state.form.input_newline(),
            KeyCode::Char(c) if !on_buttons_row => self
                .state
                .form
                .input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace if !on_buttons_row => self.state.form.backspace(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the success view
    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.on_reset(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Validate and attach the archive named by the path field.
    ///
    /// A rejected or unreadable file records a field error and leaves any
    /// previously attached archive untouched.
    pub async fn attach_zip(&mut self) {
        let path_input = self.state.form.zip_path_input.trim().to_string();
        if path_input.is_empty() {
            self.state
                .form
                .set_error(Field::ZipPath, "Enter a path to a .zip archive first");
            return;
        }
        if !is_zip_candidate(&path_input) {
            self.state
                .form
                .set_error(Field::ZipPath, "Only .zip archives are accepted");
            return;
        }

        match tokio::fs::read(&path_input).await {
            Ok(bytes) => {
                let file_name = Path::new(&path_input)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "photos.zip".to_string());
                let data_uri = format!("data:application/zip;base64,{}", STANDARD.encode(&bytes));
                tracing::debug!(file = %file_name, bytes = bytes.len(), "archive attached");
                self.state.form.attach_archive(file_name, data_uri);
            }
            Err(e) => {
                self.state
                    .form
                    .set_error(Field::ZipPath, format!("Could not read file: {e}"));
            }
        }
    }

    /// Ask the AI service to rewrite the description.
    ///
    /// Guarded on a non-empty business name; a single attempt with no retry.
    /// The description is only overwritten on success, truncated to the field
    /// limit. The busy status is reset on every outcome.
    pub async fn enhance_description(&mut self) {
        if self.state.enhance_status.is_busy() {
            return;
        }
        if self.state.form.data.business_name.is_empty() {
            self.push_error("Enter the business name first so the AI has something to work with.");
            return;
        }

        self.state.enhance_status = EnhanceStatus::Enhancing;
        let prompt = self.state.form.data.enhancement_prompt();
        let result = self.enhance.enhance(&prompt).await;
        match result {
            Ok(text) => {
                self.state.form.data.description = truncate_chars(&text, MAX_DESCRIPTION_CHARS);
                self.state.set_ai_hint("Boom! Description upgraded.");
            }
            Err(e) => {
                tracing::warn!("description rewrite failed: {e}");
                self.push_error(format!("The AI is taking a break: {e}. Try again."));
            }
        }
        self.state.enhance_status = EnhanceStatus::Idle;
    }

    /// Validate and submit the registration.
    ///
    /// Invalid data aborts before any network call, with the errors left
    /// visible from `validate()`. A transport failure keeps the form view;
    /// completion switches to the success view exactly once.
    pub async fn submit_form(&mut self) {
        if self.state.submit_status.is_busy() {
            return;
        }
        if !self.state.form.validate() {
            return;
        }

        self.state.submit_status = SubmitStatus::Submitting;
        let result = self.submit.submit(&self.state.form.data).await;
        self.state.submit_status = SubmitStatus::Idle;

        match result {
            Ok(()) => {
                let name = self.state.form.data.business_name.clone();
                self.on_submit_success(name);
            }
            Err(e) => {
                tracing::warn!("submission failed: {e}");
                self.push_error(format!(
                    "Submission failed: {e}. Check your connection and try again."
                ));
            }
        }
    }

    /// Record the submitted name and switch to the success view
    fn on_submit_success(&mut self, name: String) {
        tracing::info!(business = %name, "registration submitted");
        self.state.submitted_name = name;
        self.state.current_view = View::Success;
    }

    /// Return to an empty form
    pub fn on_reset(&mut self) {
        self.state.form = BusinessForm::default();
        self.state.submitted_name.clear();
        self.state.ai_hint = None;
        self.state.current_view = View::Form;
    }
}
