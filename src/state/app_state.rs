//! Application state definitions

use crate::state::BusinessForm;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Success,
}

/// Submit button state machine: `Idle -> Submitting -> Idle` (or the view is
/// replaced by the success screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmitStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Enhance button state machine: `Idle -> Enhancing -> Idle` on every outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnhanceStatus {
    #[default]
    Idle,
    Enhancing,
}

impl EnhanceStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Enhancing)
    }
}

/// How long the transient AI hint stays on screen
const AI_HINT_TTL: Duration = Duration::from_secs(3);

/// Transient hint shown after a successful description rewrite
#[derive(Debug, Clone)]
pub struct AiHint {
    pub text: String,
    shown_at: Instant,
}

impl AiHint {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= AI_HINT_TTL
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    /// Business name captured at the moment of a successful submission
    pub submitted_name: String,

    pub form: BusinessForm,
    pub submit_status: SubmitStatus,
    pub enhance_status: EnhanceStatus,

    /// Modal error queue, shown one dialog at a time
    error_messages: Vec<String>,
    pub ai_hint: Option<AiHint>,
}

impl AppState {
    /// Queue an error message for modal display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_messages.first().map(String::as_str)
    }

    /// Dismiss the error currently on screen
    pub fn dismiss_error(&mut self) {
        if !self.error_messages.is_empty() {
            self.error_messages.remove(0);
        }
    }

    pub fn set_ai_hint(&mut self, text: impl Into<String>) {
        self.ai_hint = Some(AiHint::new(text));
    }

    /// Drop the AI hint once its display window has passed
    pub fn expire_ai_hint(&mut self) {
        if self.ai_hint.as_ref().is_some_and(AiHint::is_expired) {
            self.ai_hint = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(state.submitted_name.is_empty());
    }

    #[test]
    fn statuses_default_to_idle() {
        let state = AppState::default();
        assert!(!state.submit_status.is_busy());
        assert!(!state.enhance_status.is_busy());
    }

    #[test]
    fn error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());

        // Dismissing with nothing queued is a no-op
        state.dismiss_error();
    }

    #[test]
    fn fresh_ai_hint_is_not_expired() {
        let hint = AiHint::new("Boom!");
        assert!(!hint.is_expired());
    }

    #[test]
    fn expire_keeps_fresh_hint() {
        let mut state = AppState::default();
        state.set_ai_hint("Boom!");
        state.expire_ai_hint();
        assert!(state.ai_hint.is_some());
    }
}
