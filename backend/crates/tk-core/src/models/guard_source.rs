use crate::storage_keys::{AUTH_TOKEN_KEY, SESSION_KEY};
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which storage flag the route guard treats as "authenticated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuardSource {
    /// The session record the session store writes on login and removes on logout.
    #[default]
    Session,
    /// The `authToken` flag, set by an external collaborator.
    AuthToken,
}

impl GuardSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::AuthToken => "auth_token",
        }
    }

    /// The storage key holding the flag.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Session => SESSION_KEY,
            Self::AuthToken => AUTH_TOKEN_KEY,
        }
    }
}

impl FromStr for GuardSource {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "session" => Ok(Self::Session),
            "auth_token" => Ok(Self::AuthToken),
            _ => Err(CoreError::InvalidGuardSource {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for GuardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
