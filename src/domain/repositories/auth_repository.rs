use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::domain::repositories::RepositoryError;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Token and principal issued by login/register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    pub user: User,
}

/// Auth repository trait
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant, RepositoryError>;

    async fn register(&self, registration: &Registration) -> Result<AuthGrant, RepositoryError>;

    /// Resolve the principal behind the session's bearer token
    async fn current_user(&self) -> Result<User, RepositoryError>;
}
