use std::sync::Arc;

use async_broadcast::{broadcast, Receiver, Sender};

use crate::domain::repositories::RepositoryError;
use crate::infrastructure::config::ClientConfig;
use crate::infrastructure::rest::repositories::{
    HttpAuthRepository, HttpCommunityRepository, HttpPartyRepository, HttpPlayerRepository,
    HttpTeamRepository,
};
use crate::infrastructure::rest::RemoteStore;
use crate::infrastructure::services::AuthSession;

/// Client state shared by every dialog and command
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,

    /// Authenticated / not-authenticated gate
    pub session: Arc<AuthSession>,

    pub community_repo: Arc<HttpCommunityRepository>,
    pub player_repo: Arc<HttpPlayerRepository>,
    pub team_repo: Arc<HttpTeamRepository>,
    pub party_repo: Arc<HttpPartyRepository>,
    pub auth_repo: Arc<HttpAuthRepository>,

    /// Notification broadcaster (success / error toasts)
    pub event_sender: Sender<Notification>,
    pub event_receiver: Receiver<Notification>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        tracing::info!("Using community backend at {}", config.base_url);

        let session = Arc::new(AuthSession::with_token(config.token.clone()));
        let store = RemoteStore::new(&config, session.clone())?;

        let community_repo = Arc::new(HttpCommunityRepository::new(store.clone()));
        let player_repo = Arc::new(HttpPlayerRepository::new(store.clone()));
        let team_repo = Arc::new(HttpTeamRepository::new(store.clone()));
        let party_repo = Arc::new(HttpPartyRepository::new(store.clone()));
        let auth_repo = Arc::new(HttpAuthRepository::new(store));

        // Oldest notification is dropped once nobody keeps up
        let (mut event_sender, event_receiver) = broadcast(config.notification_capacity.max(1));
        event_sender.set_overflow(true);

        Ok(Self {
            config,
            session,
            community_repo,
            player_repo,
            team_repo,
            party_repo,
            auth_repo,
            event_sender,
            event_receiver,
        })
    }

    /// Fail unless a session is established
    pub async fn require_session(&self) -> Result<(), RepositoryError> {
        self.session.require().await
    }

    /// New receiver seeing every notification sent from now on
    pub fn subscribe(&self) -> Receiver<Notification> {
        self.event_sender.new_receiver()
    }

    /// Broadcast a notification to all subscribers
    pub fn notify(&self, notification: Notification) {
        tracing::debug!(
            "Notifying {} receivers: {}",
            self.event_sender.receiver_count(),
            notification.message
        );
        match self.event_sender.try_broadcast(notification) {
            Ok(None) => {}
            Ok(Some(dropped)) => {
                tracing::debug!("Notification buffer full, dropped: {}", dropped.message);
            }
            Err(e) => {
                tracing::warn!("Failed to broadcast notification: {:?}", e);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient user-facing notification
#[derive(Debug, Clone, serde::Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub timestamp: i64,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notifications_reach_subscribers() {
        let state = AppState::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let mut rx = state.subscribe();

        state.notify(Notification::success("Party created successfully"));
        state.notify(Notification::error("Failed to end party"));

        let first = rx.try_recv().unwrap();
        assert_eq!(first.level, NotificationLevel::Success);
        assert_eq!(first.message, "Party created successfully");
        let second = rx.try_recv().unwrap();
        assert_eq!(second.level, NotificationLevel::Error);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_buffer_drops_oldest() {
        let mut config = ClientConfig::new("http://127.0.0.1:9");
        config.notification_capacity = 2;
        let state = AppState::new(config).unwrap();
        let mut rx = state.subscribe();

        for i in 0..3 {
            state.notify(Notification::success(format!("n{}", i)));
        }

        // The lagging receiver reports the overflow before resuming
        let mut messages = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(n) => messages.push(n.message),
                Err(async_broadcast::TryRecvError::Overflowed(_)) => continue,
                Err(_) => break,
            }
        }
        assert_eq!(messages, vec!["n1".to_string(), "n2".to_string()]);
    }

    #[tokio::test]
    async fn test_token_from_config_authenticates_session() {
        let config = ClientConfig::new("http://127.0.0.1:9").with_token(Some("tok".into()));
        let state = AppState::new(config).unwrap();
        assert!(state.require_session().await.is_ok());
    }
}
