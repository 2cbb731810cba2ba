use tk_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Corrupt data under key '{key}': {source} {location}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize '{key}': {source} {location}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
