use std::sync::Arc;

use crate::application::UseCaseError;
use crate::domain::entities::TeamId;
use crate::domain::repositories::{ErrorKind, RepositoryError, TeamRepository};

/// Delete team use case
pub struct DeleteTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> DeleteTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, team_id: TeamId) -> Result<(), DeleteTeamError> {
        self.team_repo.delete(team_id).await?;
        tracing::info!("Deleted team {}", team_id);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteTeamError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for DeleteTeamError {
    fn kind(&self) -> ErrorKind {
        match self {
            DeleteTeamError::Repository(e) => e.kind,
        }
    }
}
