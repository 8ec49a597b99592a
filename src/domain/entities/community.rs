use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Player, Team};

pub type CommunityId = i64;

/// Community entity - root aggregate for players, teams and parties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Community {
    /// Players that may still be added to `team`: community players not
    /// already on its roster, in community order.
    pub fn candidate_players(&self, team: &Team) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| !team.has_player(p.id))
            .cloned()
            .collect()
    }

    pub fn find_team(&self, team_id: super::TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn find_player(&self, player_id: super::PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::fixtures::{community, player, team};

    #[test]
    fn test_candidate_players_excludes_roster() {
        let roster = vec![player(2, "bo")];
        let blue = team(10, "Blue", roster);
        let c = community(
            vec![player(1, "ana"), player(2, "bo"), player(3, "cy")],
            vec![blue.clone()],
        );

        let ids: Vec<_> = c.candidate_players(&blue).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_candidate_players_empty_when_everyone_is_on_team() {
        let everyone = vec![player(1, "ana"), player(2, "bo")];
        let blue = team(10, "Blue", everyone.clone());
        let c = community(everyone, vec![]);

        assert!(c.candidate_players(&blue).is_empty());
    }

    #[test]
    fn test_find_team_and_player() {
        let c = community(vec![player(1, "ana")], vec![team(10, "Blue", vec![])]);
        assert_eq!(c.find_team(10).map(|t| t.name.as_str()), Some("Blue"));
        assert!(c.find_team(11).is_none());
        assert_eq!(c.find_player(1).map(|p| p.nickname.as_str()), Some("ana"));
    }
}
