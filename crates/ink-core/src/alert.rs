//! One-shot error surface shared by a screen and its view.
//!
//! An explicit two-state machine: `Idle -> Showing` on the first message,
//! `Showing -> Idle` on dismiss. A message that arrives while one is already
//! showing replaces the text but does not fire the show transition again, so
//! the view never stacks alerts. Messages are not queued.

use crate::error::GalleryError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Idle,
    Showing { title: String, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ErrorAlert {
    state: AlertState,
}

impl ErrorAlert {
    pub const DEFAULT_TITLE: &'static str = "Error";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, AlertState::Showing { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match &self.state {
            AlertState::Showing { title, .. } => Some(title),
            AlertState::Idle => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            AlertState::Showing { message, .. } => Some(message),
            AlertState::Idle => None,
        }
    }

    /// Sets the alert text.
    ///
    /// Returns `true` only when this call moved the alert from `Idle` to
    /// `Showing`. While showing, the text (and the title, if given) is
    /// overwritten and `false` is returned.
    pub fn set_message(&mut self, title: Option<&str>, message: impl Into<String>) -> bool {
        let message = message.into();
        if let AlertState::Showing {
            title: current_title,
            message: current_message,
        } = &mut self.state
        {
            if let Some(title) = title {
                *current_title = title.to_string();
            }
            *current_message = message;
            return false;
        }

        self.state = AlertState::Showing {
            title: title.unwrap_or(Self::DEFAULT_TITLE).to_string(),
            message,
        };
        true
    }

    /// Surfaces a typed error with the default title.
    pub fn report(&mut self, error: &GalleryError) -> bool {
        self.set_message(None, error.user_message())
    }

    /// Clears the alert. Returns the state that was showing, if any.
    pub fn dismiss(&mut self) -> Option<AlertState> {
        match std::mem::take(&mut self.state) {
            AlertState::Idle => None,
            showing => Some(showing),
        }
    }
}
