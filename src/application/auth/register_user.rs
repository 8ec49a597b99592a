use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::User;
use crate::domain::repositories::{AuthRepository, ErrorKind, Registration, RepositoryError};
use crate::infrastructure::services::AuthSession;

/// Register user input
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register user use case; signs the new user in
pub struct RegisterUser<A: AuthRepository> {
    auth_repo: Arc<A>,
    session: Arc<AuthSession>,
}

impl<A: AuthRepository> RegisterUser<A> {
    pub fn new(auth_repo: Arc<A>, session: Arc<AuthSession>) -> Self {
        Self { auth_repo, session }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterError> {
        let name = non_blank(&input.name)
            .ok_or_else(|| RegisterError::Validation("Name is required".into()))?;
        let email = non_blank(&input.email)
            .ok_or_else(|| RegisterError::Validation("Email is required".into()))?;
        if input.password.is_empty() {
            return Err(RegisterError::Validation("Password is required".into()));
        }

        let grant = self
            .auth_repo
            .register(&Registration {
                name: name.to_string(),
                email: email.to_string(),
                password: input.password,
            })
            .await?;

        self.session.sign_in(grant.token, grant.user.clone()).await;
        Ok(grant.user)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for RegisterError {
    fn kind(&self) -> ErrorKind {
        match self {
            RegisterError::Validation(_) => ErrorKind::Validation,
            RegisterError::Repository(e) => e.kind,
        }
    }
}
