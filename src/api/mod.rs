pub mod dialogs;

// Re-export for convenience
pub use crate::infrastructure::app_state::{AppState, Notification, NotificationLevel};
