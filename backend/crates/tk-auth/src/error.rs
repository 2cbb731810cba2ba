use tk_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User not found {location}")]
    UserNotFound { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Registered user record is corrupt: {source} {location}")]
    CorruptRecord {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize identity: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Message suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "User not found",
            Self::InvalidCredentials { .. } => "Invalid credentials",
            Self::CorruptRecord { .. } => "Stored account data is unreadable",
            Self::Serialize { .. } | Self::Storage { .. } => "Storage is unavailable",
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
