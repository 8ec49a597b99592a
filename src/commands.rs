use anyhow::{anyhow, Result};

use community_hub::api::dialogs::{
    AddPlayersToTeamDialog, CreateCommunityDialog, CreatePartyDialog, CreatePlayerDialog,
    CreateTeamDialog, DeleteCommunityDialog, DeletePartyDialog, DeletePlayerDialog,
    EndPartyDialog, RemovePlayersFromTeamDialog, RenameTeamDialog,
};
use community_hub::api::{AppState, Notification};
use community_hub::application::auth::{
    GetCurrentUser, LoginUser, LoginUserInput, RegisterUser, RegisterUserInput,
};
use community_hub::application::community::{GetCommunity, ListCommunities};
use community_hub::application::party::{GetPartyDetails, ListCommunityParties};
use community_hub::application::team::DeleteTeam;
use community_hub::domain::entities::{Community, CommunityId, Party, Team, TeamId};

use crate::cli::{AuthCommand, CommunityCommand, PartyCommand, PlayerCommand, TeamCommand};

pub async fn cmd_auth(app: &AppState, cmd: AuthCommand) -> Result<()> {
    match cmd {
        AuthCommand::Login { email, password } => {
            let user = LoginUser::new(app.auth_repo.clone(), app.session.clone())
                .execute(LoginUserInput { email, password })
                .await?;
            app.notify(Notification::success(format!("Welcome back, {}", user.name)));
            print_token(app).await;
        }
        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            let user = RegisterUser::new(app.auth_repo.clone(), app.session.clone())
                .execute(RegisterUserInput {
                    name,
                    email,
                    password,
                })
                .await?;
            app.notify(Notification::success(format!("Welcome, {}", user.name)));
            print_token(app).await;
        }
        AuthCommand::Whoami => {
            let user = GetCurrentUser::new(app.auth_repo.clone(), app.session.clone())
                .execute()
                .await?;
            println!("{} <{}> (id {})", user.name, user.email, user.id);
        }
    }
    Ok(())
}

pub async fn cmd_community(app: &AppState, cmd: CommunityCommand) -> Result<()> {
    match cmd {
        CommunityCommand::List => {
            let communities = ListCommunities::new(app.community_repo.clone())
                .execute()
                .await?;
            print_communities(&communities);
        }
        CommunityCommand::Show { community_id } => {
            let community = fetch_community(app, community_id).await?;
            print_community(&community);
        }
        CommunityCommand::Create { name } => {
            let mut dialog = CreateCommunityDialog::open();
            dialog.set_name(name);
            print_communities(&dialog.submit(app).await?);
        }
        CommunityCommand::Delete { community_id } => {
            let mut dialog = DeleteCommunityDialog::open(community_id);
            print_communities(&dialog.confirm(app).await?);
        }
    }
    Ok(())
}

pub async fn cmd_player(app: &AppState, cmd: PlayerCommand) -> Result<()> {
    match cmd {
        PlayerCommand::Add {
            community_id,
            nickname,
        } => {
            let mut dialog = CreatePlayerDialog::open(community_id);
            dialog.set_nickname(nickname);
            print_community(&dialog.submit(app).await?);
        }
        PlayerCommand::Delete {
            community_id,
            player_id,
        } => {
            let mut dialog = DeletePlayerDialog::open(community_id, player_id);
            print_community(&dialog.confirm(app).await?);
        }
    }
    Ok(())
}

pub async fn cmd_team(app: &AppState, cmd: TeamCommand) -> Result<()> {
    match cmd {
        TeamCommand::Create { community_id, name } => {
            let mut dialog = CreateTeamDialog::open(community_id);
            dialog.set_name(name);
            print_community(&dialog.submit(app).await?);
        }
        TeamCommand::Rename {
            community_id,
            team_id,
            name,
        } => {
            let community = fetch_community(app, community_id).await?;
            let team = team_of(&community, team_id)?;
            let mut dialog = RenameTeamDialog::open(community_id, team);
            dialog.set_name(name);
            print_community(&dialog.submit(app).await?);
        }
        TeamCommand::AddPlayers {
            community_id,
            team_id,
            player_ids,
        } => {
            let community = fetch_community(app, community_id).await?;
            let team = team_of(&community, team_id)?;
            let mut dialog = AddPlayersToTeamDialog::open(&community, team);
            for player_id in player_ids {
                if !dialog.select_player(player_id) {
                    eprintln!("Skipping player {}: not a candidate for this team", player_id);
                }
            }
            print_community(&dialog.submit(app).await?);
        }
        TeamCommand::RemovePlayers {
            community_id,
            team_id,
            player_ids,
        } => {
            let community = fetch_community(app, community_id).await?;
            let team = team_of(&community, team_id)?;
            let mut dialog = RemovePlayersFromTeamDialog::open(community_id, team);
            for player_id in player_ids {
                if !dialog.select_player(player_id) {
                    eprintln!("Skipping player {}: not on this team", player_id);
                }
            }
            print_community(&dialog.submit(app).await?);
        }
        TeamCommand::Delete {
            community_id,
            team_id,
        } => {
            app.require_session().await?;
            DeleteTeam::new(app.team_repo.clone())
                .execute(team_id)
                .await?;
            app.notify(Notification::success("Team deleted successfully"));
            print_community(&fetch_community(app, community_id).await?);
        }
    }
    Ok(())
}

pub async fn cmd_party(app: &AppState, cmd: PartyCommand) -> Result<()> {
    match cmd {
        PartyCommand::List { community_id } => {
            let parties = ListCommunityParties::new(app.party_repo.clone())
                .execute(community_id)
                .await?;
            print_parties(&parties);
        }
        PartyCommand::Show { party_id } => {
            print_party(&fetch_party(app, party_id).await?);
        }
        PartyCommand::Create {
            community_id,
            game_name,
            teams,
        } => {
            let community = fetch_community(app, community_id).await?;
            let mut dialog = CreatePartyDialog::open(community_id, community.teams);
            dialog.set_game_name(game_name);
            for team_id in teams {
                if !dialog.select_team(team_id) {
                    return Err(anyhow!(
                        "Team {} does not belong to community {}",
                        team_id,
                        community_id
                    ));
                }
            }
            print_parties(&dialog.submit(app).await?);
        }
        PartyCommand::End { party_id, winner } => {
            let party = fetch_party(app, party_id).await?;
            let mut dialog = EndPartyDialog::open(party);
            if let Some(team_id) = winner {
                if !dialog.select_winner(Some(team_id)) {
                    return Err(anyhow!("Team {} did not play in party {}", team_id, party_id));
                }
            }
            print_parties(&dialog.submit(app).await?);
        }
        PartyCommand::Delete { party_id } => {
            let party = fetch_party(app, party_id).await?;
            let mut dialog = DeletePartyDialog::open(party.id, party.community_id);
            print_parties(&dialog.confirm(app).await?);
        }
    }
    Ok(())
}

async fn fetch_community(app: &AppState, community_id: CommunityId) -> Result<Community> {
    Ok(GetCommunity::new(app.community_repo.clone())
        .execute(community_id)
        .await?)
}

async fn fetch_party(app: &AppState, party_id: i64) -> Result<Party> {
    Ok(GetPartyDetails::new(app.party_repo.clone())
        .execute(party_id)
        .await?)
}

fn team_of(community: &Community, team_id: TeamId) -> Result<Team> {
    community
        .find_team(team_id)
        .cloned()
        .ok_or_else(|| anyhow!("Team {} not found in community {}", team_id, community.id))
}

async fn print_token(app: &AppState) {
    if let Some(token) = app.session.token().await {
        println!("export COMMUNITY_API_TOKEN={}", token);
    }
}

fn print_communities(communities: &[Community]) {
    if communities.is_empty() {
        println!("No communities yet.");
        return;
    }
    for community in communities {
        println!(
            "{:>5}  {}  ({} players, {} teams)",
            community.id,
            community.name,
            community.players.len(),
            community.teams.len()
        );
    }
}

fn print_community(community: &Community) {
    println!("{} (id {})", community.name, community.id);
    println!("Players:");
    for player in &community.players {
        println!("  {:>5}  {}", player.id, player.nickname);
    }
    println!("Teams:");
    for team in &community.teams {
        let roster: Vec<&str> = team.players.iter().map(|p| p.nickname.as_str()).collect();
        println!("  {:>5}  {}  [{}]", team.id, team.name, roster.join(", "));
    }
}

fn print_parties(parties: &[Party]) {
    if parties.is_empty() {
        println!("No parties found for this community.");
        return;
    }
    for party in parties {
        print_party(party);
    }
}

fn print_party(party: &Party) {
    let teams: Vec<&str> = party.teams.iter().map(|t| t.name.as_str()).collect();
    let outcome = match (party.is_finished(), party.winner()) {
        (true, Some(team)) => format!("won by {}", team.name),
        (true, None) => "no winner".to_string(),
        (false, _) => String::new(),
    };
    println!(
        "{:>5}  {}  {}  [{}]  {}",
        party.id,
        party.game_name,
        party.status().as_str(),
        teams.join(" vs "),
        outcome
    );
}
