use async_trait::async_trait;

use crate::domain::entities::{CommunityId, PlayerId, Team, TeamId};
use crate::domain::repositories::RepositoryError;

/// Team repository trait
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a team with an empty roster
    async fn create(&self, name: &str, community_id: CommunityId) -> Result<Team, RepositoryError>;

    /// Add players to the roster (server computes the union)
    async fn add_players(
        &self,
        team_id: TeamId,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError>;

    /// Replace the whole roster with `player_ids`
    async fn replace_players(
        &self,
        team_id: TeamId,
        name: &str,
        player_ids: &[PlayerId],
    ) -> Result<(), RepositoryError>;

    async fn rename(&self, team_id: TeamId, name: &str) -> Result<(), RepositoryError>;

    async fn delete(&self, team_id: TeamId) -> Result<(), RepositoryError>;
}
