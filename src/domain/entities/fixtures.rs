use chrono::Utc;

use super::{Community, CommunityId, Party, PartyId, Player, PlayerId, Team, TeamId};

pub fn player(id: PlayerId, nickname: &str) -> Player {
    let now = Utc::now();
    Player {
        id,
        nickname: nickname.to_string(),
        community_id: Some(1),
        created_at: now,
        updated_at: now,
    }
}

pub fn team(id: TeamId, name: &str, players: Vec<Player>) -> Team {
    let now = Utc::now();
    Team {
        id,
        name: name.to_string(),
        community_id: Some(1),
        players,
        created_at: now,
        updated_at: now,
    }
}

pub fn community(players: Vec<Player>, teams: Vec<Team>) -> Community {
    let now = Utc::now();
    Community {
        id: 1,
        name: "Friday Night".to_string(),
        created_at: now,
        updated_at: now,
        players,
        teams,
    }
}

pub fn party(id: PartyId, community_id: CommunityId, team_ids: &[TeamId]) -> Party {
    let now = Utc::now();
    Party {
        id,
        community_id,
        game_name: format!("game-{}", id),
        team_winner_id: None,
        finished_at: None,
        created_at: now,
        updated_at: now,
        teams: team_ids
            .iter()
            .map(|tid| team(*tid, &format!("team-{}", tid), vec![]))
            .collect(),
    }
}
