use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::User;
use crate::domain::repositories::{AuthRepository, Credentials, ErrorKind, RepositoryError};
use crate::infrastructure::services::AuthSession;

/// Login user input
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

/// Login user use case; establishes the session on success
pub struct LoginUser<A: AuthRepository> {
    auth_repo: Arc<A>,
    session: Arc<AuthSession>,
}

impl<A: AuthRepository> LoginUser<A> {
    pub fn new(auth_repo: Arc<A>, session: Arc<AuthSession>) -> Self {
        Self { auth_repo, session }
    }

    pub async fn execute(&self, input: LoginUserInput) -> Result<User, LoginError> {
        let email = non_blank(&input.email)
            .ok_or_else(|| LoginError::Validation("Email is required".into()))?;
        if input.password.is_empty() {
            return Err(LoginError::Validation("Password is required".into()));
        }

        let grant = self
            .auth_repo
            .login(&Credentials {
                email: email.to_string(),
                password: input.password,
            })
            .await?;

        self.session.sign_in(grant.token, grant.user.clone()).await;
        Ok(grant.user)
    }
}

/// Drop the local session; the backend keeps no session state
pub async fn logout_user(session: &AuthSession) {
    session.sign_out().await;
    tracing::info!("Signed out");
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for LoginError {
    fn kind(&self) -> ErrorKind {
        match self {
            LoginError::Validation(_) => ErrorKind::Validation,
            LoginError::Repository(e) => e.kind,
        }
    }
}
