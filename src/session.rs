//! Explicit session context.
//!
//! The session carries the signed-in user's identity to whatever needs it.
//! It is created at login (or process start for the binary) and consumed by
//! [`Session::logout`]. Credentials are checked by the authentication
//! provider before a session is built; nothing here validates them.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// The current user, as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique id of this session
    pub id: Uuid,
    /// Provider-issued user id; trip ownership is keyed on it
    pub user_id: String,
    pub display_name: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Opens a session for an already-authenticated user.
    pub fn login(user_id: impl Into<String>, display_name: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(Error::Validation {
                message: "Session user id cannot be empty".to_string(),
            });
        }
        let session = Self {
            id: Uuid::new_v4(),
            user_id: user_id.trim().to_string(),
            display_name: display_name.into(),
            started_at: Utc::now(),
        };
        info!(user_id = %session.user_id, session_id = %session.id, "Session started");
        Ok(session)
    }

    /// Builds the session for the command-line user from
    /// `TRIP_BUDDY_USER_ID` and optional `TRIP_BUDDY_USER_NAME`.
    pub fn from_env() -> Result<Self> {
        let user_id = std::env::var("TRIP_BUDDY_USER_ID")?;
        let display_name =
            std::env::var("TRIP_BUDDY_USER_NAME").unwrap_or_else(|_| user_id.clone());
        Self::login(user_id, display_name)
    }

    #[must_use]
    pub fn owns(&self, owner_id: &str) -> bool {
        self.user_id == owner_id
    }

    /// Ends the session. Taking `self` by value means no further calls can be
    /// made with it.
    #[allow(clippy::needless_pass_by_value)]
    pub fn logout(self) {
        info!(user_id = %self.user_id, session_id = %self.id, "Session ended");
    }
}
