use std::sync::Arc;

use crate::application::{non_blank, UseCaseError};
use crate::domain::entities::{CommunityId, Team};
use crate::domain::repositories::{ErrorKind, RepositoryError, TeamRepository};

/// Create team input
pub struct CreateTeamInput {
    pub name: String,
    pub community_id: CommunityId,
}

/// Create team use case; the roster starts empty
pub struct CreateTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> CreateTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(&self, input: CreateTeamInput) -> Result<Team, CreateTeamError> {
        let name = non_blank(&input.name)
            .ok_or_else(|| CreateTeamError::Validation("Team name is required".into()))?;

        let team = self.team_repo.create(name, input.community_id).await?;
        tracing::info!("Created team {} in community {}", team.id, input.community_id);
        Ok(team)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTeamError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for CreateTeamError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreateTeamError::Validation(_) => ErrorKind::Validation,
            CreateTeamError::Repository(e) => e.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{Call, FakeStore};

    #[tokio::test]
    async fn test_create_team() {
        let store = Arc::new(FakeStore::new());
        let team = CreateTeam::new(store.clone())
            .execute(CreateTeamInput {
                name: " Blue ".into(),
                community_id: 5,
            })
            .await
            .unwrap();

        assert!(team.players.is_empty());
        assert_eq!(store.calls(), vec![Call::CreateTeam("Blue".into(), 5)]);
    }

    #[tokio::test]
    async fn test_blank_team_name() {
        let store = Arc::new(FakeStore::new());
        let err = CreateTeam::new(store.clone())
            .execute(CreateTeamInput {
                name: "".into(),
                community_id: 5,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(store.calls().is_empty());
    }
}
