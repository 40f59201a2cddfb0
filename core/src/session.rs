use crate::types::Username;
use serde::{Deserialize, Serialize};

/// At most one account is authenticated at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn { username: Username },
}

impl SessionState {
    pub fn current_username(&self) -> Option<&str> {
        match self {
            Self::LoggedOut                => None,
            Self::LoggedIn { username }    => Some(username),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}
