//! Dialogs
//!
//! Each user interaction gets its own short-lived dialog object: it holds the
//! inputs being edited, submits them through a use case, broadcasts the
//! outcome as a notification and re-fetches the affected aggregate. Dialogs
//! move `Editing -> Submitting -> Closed` on success and back to `Editing`
//! on failure, so at most one call is in flight per dialog.

mod community;
mod party;
mod player;
mod refresh;
mod team;

pub use community::*;
pub use party::*;
pub use player::*;
pub use team::*;

use crate::application::UseCaseError;
use crate::domain::repositories::{ErrorKind, RepositoryError};
use crate::infrastructure::app_state::{AppState, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Editing,
    Submitting,
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("A submission is already in progress")]
    Busy,
    #[error("This dialog is closed")]
    Closed,
    #[error("{message}")]
    Failed { kind: ErrorKind, message: String },
}

impl DialogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DialogError::Busy | DialogError::Closed => ErrorKind::Validation,
            DialogError::Failed { kind, .. } => *kind,
        }
    }

    fn from_use_case<E: UseCaseError>(error: &E) -> Self {
        DialogError::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<RepositoryError> for DialogError {
    fn from(error: RepositoryError) -> Self {
        DialogError::Failed {
            kind: error.kind,
            message: error.message,
        }
    }
}

/// State machine shared by all dialogs
#[derive(Debug)]
pub struct Lifecycle {
    state: DialogState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: DialogState::Editing,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == DialogState::Editing
    }

    /// Enter `Submitting`; requires an authenticated session.
    pub async fn begin(&mut self, app: &AppState) -> Result<(), DialogError> {
        match self.state {
            DialogState::Submitting => return Err(DialogError::Busy),
            DialogState::Closed => return Err(DialogError::Closed),
            DialogState::Editing => {}
        }

        if let Err(e) = app.require_session().await {
            app.notify(Notification::error(e.message.clone()));
            return Err(e.into());
        }

        self.state = DialogState::Submitting;
        Ok(())
    }

    /// Back to `Editing` after a failed submission, notifying the error
    pub fn fail<E: UseCaseError>(&mut self, app: &AppState, error: &E) -> DialogError {
        self.state = DialogState::Editing;
        tracing::warn!("Submission failed ({}): {}", error.kind().as_str(), error);
        app.notify(Notification::error(error.to_string()));
        DialogError::from_use_case(error)
    }

    /// Close after a successful submission, notifying `message`
    pub fn succeed(&mut self, app: &AppState, message: &str) {
        self.state = DialogState::Closed;
        app.notify(Notification::success(message));
    }

    /// Dismiss without submitting; ignored while a call is in flight
    pub fn close(&mut self) {
        if self.state != DialogState::Submitting {
            self.state = DialogState::Closed;
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids picked in a dialog, in the order they were picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    items: Vec<T>,
}

impl<T: Copy + PartialEq> Selection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `item` if absent, remove it otherwise
    pub fn toggle(&mut self, item: T) {
        match self.items.iter().position(|i| *i == item) {
            Some(idx) => {
                self.items.remove(idx);
            }
            None => self.items.push(item),
        }
    }

    /// Add `item` unless already picked
    pub fn select(&mut self, item: T) {
        if !self.contains(item) {
            self.items.push(item);
        }
    }

    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Copy + PartialEq> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ClientConfig;

    fn app(token: Option<&str>) -> AppState {
        let config =
            ClientConfig::new("http://127.0.0.1:9").with_token(token.map(|t| t.to_string()));
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_selection_toggle_keeps_pick_order() {
        let mut selection = Selection::new();
        selection.toggle(3);
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(1);

        assert_eq!(selection.as_slice(), &[3, 2]);
        assert!(selection.contains(2));
        assert!(!selection.contains(1));
        assert_eq!(selection.len(), 2);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_select_is_idempotent() {
        let mut selection = Selection::new();
        for id in [1, 2, 2, 1] {
            selection.select(id);
        }
        assert_eq!(selection.as_slice(), &[1, 2]);
    }

    #[tokio::test]
    async fn test_second_begin_is_busy() {
        let app = app(Some("tok"));
        let mut lifecycle = Lifecycle::new();

        lifecycle.begin(&app).await.unwrap();
        assert_eq!(lifecycle.state(), DialogState::Submitting);
        assert!(matches!(lifecycle.begin(&app).await, Err(DialogError::Busy)));

        // Closing is ignored while submitting
        lifecycle.close();
        assert_eq!(lifecycle.state(), DialogState::Submitting);
    }

    #[tokio::test]
    async fn test_closed_dialog_rejects_submission() {
        let app = app(Some("tok"));
        let mut lifecycle = Lifecycle::new();
        lifecycle.close();

        assert!(matches!(lifecycle.begin(&app).await, Err(DialogError::Closed)));
    }

    #[tokio::test]
    async fn test_begin_without_session_notifies_and_stays_editing() {
        let app = app(None);
        let mut rx = app.subscribe();
        let mut lifecycle = Lifecycle::new();

        let err = lifecycle.begin(&app).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert!(lifecycle.is_editing());
        assert_eq!(rx.try_recv().unwrap().message, "You must be signed in");
    }
}
