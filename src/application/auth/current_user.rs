use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::User;
use crate::domain::repositories::{AuthRepository, ErrorKind, RepositoryError};
use crate::infrastructure::services::AuthSession;

/// Resolve the signed-in user through the backend
pub struct GetCurrentUser<A: AuthRepository> {
    auth_repo: Arc<A>,
    session: Arc<AuthSession>,
}

impl<A: AuthRepository> GetCurrentUser<A> {
    pub fn new(auth_repo: Arc<A>, session: Arc<AuthSession>) -> Self {
        Self { auth_repo, session }
    }

    pub async fn execute(&self) -> Result<User, CurrentUserError> {
        self.session.require().await?;

        let user = self.auth_repo.current_user().await?;
        self.session.set_user(user.clone()).await;
        Ok(user)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for CurrentUserError {
    fn kind(&self) -> ErrorKind {
        match self {
            CurrentUserError::Repository(e) => e.kind,
        }
    }
}
