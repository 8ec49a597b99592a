use std::sync::Arc;

use crate::application::{distinct, UseCaseError};
use crate::domain::entities::{PlayerId, Team};
use crate::domain::repositories::{ErrorKind, RepositoryError, TeamRepository};

/// Remove players input
pub struct RemovePlayersFromTeamInput {
    /// Roster snapshot the selection was made from
    pub team: Team,
    pub player_ids: Vec<PlayerId>,
}

/// Remove players from a team by submitting the retained roster as the new
/// complete roster.
///
/// A roster change made elsewhere between fetching `team` and submitting is
/// overwritten.
pub struct RemovePlayersFromTeam<T: TeamRepository> {
    team_repo: Arc<T>,
}

impl<T: TeamRepository> RemovePlayersFromTeam<T> {
    pub fn new(team_repo: Arc<T>) -> Self {
        Self { team_repo }
    }

    pub async fn execute(
        &self,
        input: RemovePlayersFromTeamInput,
    ) -> Result<Vec<PlayerId>, RemovePlayersError> {
        let removed = distinct(&input.player_ids);
        if removed.is_empty() {
            return Err(RemovePlayersError::Validation(
                "Please select at least one player".into(),
            ));
        }
        if let Some(stranger) = removed.iter().find(|id| !input.team.has_player(**id)) {
            return Err(RemovePlayersError::NotOnTeam(*stranger));
        }

        let retained = input.team.retained_player_ids(&removed);
        self.team_repo
            .replace_players(input.team.id, &input.team.name, &retained)
            .await?;

        tracing::info!(
            "Removed {} players from team {} ({} remain)",
            removed.len(),
            input.team.id,
            retained.len()
        );
        Ok(retained)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemovePlayersError {
    #[error("{0}")]
    Validation(String),
    #[error("Player {0} is not on this team")]
    NotOnTeam(PlayerId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for RemovePlayersError {
    fn kind(&self) -> ErrorKind {
        match self {
            RemovePlayersError::Validation(_) | RemovePlayersError::NotOnTeam(_) => {
                ErrorKind::Validation
            }
            RemovePlayersError::Repository(e) => e.kind,
        }
    }
}
