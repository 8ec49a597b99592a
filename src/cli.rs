use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "community-hub")]
#[command(about = "Manage gaming communities, their teams and parties")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "COMMUNITY_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token from a previous login
    #[arg(long, env = "COMMUNITY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Authentication commands
    Auth {
        #[command(subcommand)]
        auth_cmd: AuthCommand,
    },
    /// Community commands
    Community {
        #[command(subcommand)]
        community_cmd: CommunityCommand,
    },
    /// Player commands
    Player {
        #[command(subcommand)]
        player_cmd: PlayerCommand,
    },
    /// Team commands
    Team {
        #[command(subcommand)]
        team_cmd: TeamCommand,
    },
    /// Party commands
    Party {
        #[command(subcommand)]
        party_cmd: PartyCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in and print the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the session token
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the user owning the current token
    Whoami,
}

#[derive(Subcommand)]
pub enum CommunityCommand {
    /// List communities
    List,
    /// Show a community with its players and teams
    Show { community_id: i64 },
    /// Create a community
    Create { name: String },
    /// Delete a community
    Delete { community_id: i64 },
}

#[derive(Subcommand)]
pub enum PlayerCommand {
    /// Add a player to a community
    Add { community_id: i64, nickname: String },
    /// Delete a player
    Delete { community_id: i64, player_id: i64 },
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// Create an empty team
    Create { community_id: i64, name: String },
    /// Rename a team
    Rename {
        community_id: i64,
        team_id: i64,
        name: String,
    },
    /// Add players to a team
    AddPlayers {
        community_id: i64,
        team_id: i64,
        #[arg(required = true, num_args = 1..)]
        player_ids: Vec<i64>,
    },
    /// Remove players from a team
    RemovePlayers {
        community_id: i64,
        team_id: i64,
        #[arg(required = true, num_args = 1..)]
        player_ids: Vec<i64>,
    },
    /// Delete a team
    Delete { community_id: i64, team_id: i64 },
}

#[derive(Subcommand)]
pub enum PartyCommand {
    /// List the parties of a community
    List { community_id: i64 },
    /// Show one party
    Show { party_id: i64 },
    /// Start a party between two or more teams
    Create {
        community_id: i64,
        game_name: String,
        /// Team ids, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        teams: Vec<i64>,
    },
    /// End a party, optionally naming the winner
    End {
        party_id: i64,
        #[arg(long)]
        winner: Option<i64>,
    },
    /// Delete a party
    Delete { party_id: i64 },
}
