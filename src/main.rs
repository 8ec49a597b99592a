use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use community_hub::api::dialogs::DialogError;
use community_hub::api::{AppState, NotificationLevel};
use community_hub::infrastructure::config::ClientConfig;

use crate::cli::{Cli, Command};
use crate::commands::{cmd_auth, cmd_community, cmd_party, cmd_player, cmd_team};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "community_hub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::default(),
    };
    if cli.token.is_some() {
        config = config.with_token(cli.token);
    }

    let state = AppState::new(config)?;
    let mut notifications = state.subscribe();

    let result = match cli.command {
        Command::Auth { auth_cmd } => cmd_auth(&state, auth_cmd).await,
        Command::Community { community_cmd } => cmd_community(&state, community_cmd).await,
        Command::Player { player_cmd } => cmd_player(&state, player_cmd).await,
        Command::Team { team_cmd } => cmd_team(&state, team_cmd).await,
        Command::Party { party_cmd } => cmd_party(&state, party_cmd).await,
    };

    loop {
        let notification = match notifications.try_recv() {
            Ok(n) => n,
            Err(async_broadcast::TryRecvError::Overflowed(_)) => continue,
            Err(_) => break,
        };
        match notification.level {
            NotificationLevel::Success => eprintln!("✓ {}", notification.message),
            NotificationLevel::Error => eprintln!("✗ {}", notification.message),
        }
    }

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            if !already_notified(&e) {
                eprintln!("✗ {:#}", e);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Failed dialog submissions are broadcast as notifications before they are returned
fn already_notified(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<DialogError>(),
        Some(DialogError::Failed { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use community_hub::domain::repositories::ErrorKind;

    #[test]
    fn test_dialog_failures_are_not_printed_twice() {
        let dialog = anyhow::Error::new(DialogError::Failed {
            kind: ErrorKind::Validation,
            message: "At least 2 teams are required for a party".into(),
        });
        assert!(already_notified(&dialog));

        let other = anyhow::anyhow!("Team 9 did not play in party 4");
        assert!(!already_notified(&other));
        assert!(!already_notified(&anyhow::Error::new(DialogError::Busy)));
    }
}
