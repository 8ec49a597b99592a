mod auth_repository;
mod community_repository;
mod party_repository;
mod player_repository;
mod team_repository;

pub use auth_repository::*;
pub use community_repository::*;
pub use party_repository::*;
pub use player_repository::*;
pub use team_repository::*;

/// Failure category surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was sent
    Validation,
    /// The call failed in transit or the backend answered with an error status
    Transport,
    /// No authenticated session
    Unauthenticated,
    /// The backend answered with something we could not read
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Transport => "transport",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::Unknown => "unknown",
        }
    }
}

/// Error type for repository operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RepositoryError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, when the backend answered at all
    pub status: Option<u16>,
}

impl RepositoryError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: message.into(),
            status: None,
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unauthenticated,
            message: message.into(),
            status: None,
        }
    }
}
