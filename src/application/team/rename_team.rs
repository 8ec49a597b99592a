use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::TeamId;
use crate::domain::repositories::{ErrorKind, RepositoryError, TeamRepository};

/// Rename team input
pub struct RenameTeamInput {
    pub team_id: TeamId,
    pub name: String,
}

/// Rename team use case
pub struct RenameTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> RenameTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, input: RenameTeamInput) -> Result<(), RenameTeamError> {
        let name = non_blank(&input.name)
            .ok_or_else(|| RenameTeamError::Validation("Team name is required".into()))?;

        self.team_repo.rename(input.team_id, name).await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenameTeamError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for RenameTeamError {
    fn kind(&self) -> ErrorKind {
        match self {
            RenameTeamError::Validation(_) => ErrorKind::Validation,
            RenameTeamError::Repository(e) => e.kind,
        }
    }
}
