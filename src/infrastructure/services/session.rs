use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::repositories::RepositoryError;

/// Signed-in state
#[derive(Debug, Clone)]
pub struct SessionState {
    pub token: String,
    /// Unknown until resolved through `/auth/me` when restored from a token
    pub user: Option<User>,
}

/// Authenticated / not-authenticated gate holding the bearer token
pub struct AuthSession {
    state: RwLock<Option<SessionState>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(None),
        }
    }

    /// Start from a previously issued token, if any
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            state: RwLock::new(token.map(|token| SessionState { token, user: None })),
        }
    }

    pub async fn sign_in(&self, token: String, user: User) {
        tracing::info!("Signed in as {}", user.email);
        *self.state.write().await = Some(SessionState {
            token,
            user: Some(user),
        });
    }

    pub async fn restore(&self, token: String) {
        *self.state.write().await = Some(SessionState { token, user: None });
    }

    /// Attach the resolved principal to the current session
    pub async fn set_user(&self, user: User) {
        if let Some(state) = self.state.write().await.as_mut() {
            state.user = Some(user);
        }
    }

    pub async fn sign_out(&self) {
        *self.state.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.as_ref().and_then(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    pub async fn require(&self) -> Result<(), RepositoryError> {
        if self.is_authenticated().await {
            Ok(())
        } else {
            Err(RepositoryError::unauthenticated("You must be signed in"))
        }
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ErrorKind;

    fn user() -> User {
        User {
            id: 1,
            name: "Ana".into(),
            email: "ana@example.com".into(),
        }
    }

    #[tokio::test]
    async fn test_gate_follows_sign_in_and_out() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated().await);
        let err = session.require().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);

        session.sign_in("tok".into(), user()).await;
        assert!(session.require().await.is_ok());
        assert_eq!(session.token().await.as_deref(), Some("tok"));
        assert_eq!(session.user().await, Some(user()));

        session.sign_out().await;
        assert!(session.token().await.is_none());
    }

    #[tokio::test]
    async fn test_restored_session_resolves_user_later() {
        let session = AuthSession::with_token(Some("tok".into()));
        assert!(session.is_authenticated().await);
        assert!(session.user().await.is_none());

        session.set_user(user()).await;
        assert_eq!(session.user().await.map(|u| u.id), Some(1));
    }

    #[tokio::test]
    async fn test_set_user_without_session_is_ignored() {
        let session = AuthSession::new();
        session.set_user(user()).await;
        assert!(!session.is_authenticated().await);
    }
}
