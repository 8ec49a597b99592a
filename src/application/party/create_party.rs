use std::sync::Arc;

use crate::application::{distinct, non_blank, UseCaseError};
use crate::domain::entities::{CommunityId, Party, TeamId};
use crate::domain::repositories::{ErrorKind, NewParty, PartyRepository, RepositoryError};

/// Minimum number of distinct teams in a party
pub const MIN_PARTY_TEAMS: usize = 2;

/// Create party input
pub struct CreatePartyInput {
    pub game_name: String,
    pub team_ids: Vec<TeamId>,
    pub community_id: CommunityId,
}

/// Create party use case
pub struct CreateParty<P: PartyRepository> {
    party_repo: Arc<P>,
}

impl<P: PartyRepository> CreateParty<P> {
    pub fn new(party_repo: Arc<P>) -> Self {
        Self { party_repo }
    }

    pub async fn execute(&self, input: CreatePartyInput) -> Result<Party, CreatePartyError> {
        let game_name = non_blank(&input.game_name)
            .ok_or_else(|| CreatePartyError::Validation("Game name is required".into()))?;

        let team_ids = distinct(&input.team_ids);
        if team_ids.len() < MIN_PARTY_TEAMS {
            return Err(CreatePartyError::Validation(
                "At least 2 teams are required for a party".into(),
            ));
        }

        let party = self
            .party_repo
            .create(&NewParty {
                game_name: game_name.to_string(),
                team_ids,
                community_id: input.community_id,
            })
            .await?;

        tracing::info!(
            "Created party {} ({}) in community {}",
            party.id,
            party.game_name,
            party.community_id
        );
        Ok(party)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePartyError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError for CreatePartyError {
    fn kind(&self) -> ErrorKind {
        match self {
            CreatePartyError::Validation(_) => ErrorKind::Validation,
            CreatePartyError::Repository(e) => e.kind,
        }
    }
}
