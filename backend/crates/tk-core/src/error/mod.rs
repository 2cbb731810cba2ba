use crate::ErrorLocation;

use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid ticket status: {value} {location}")]
    InvalidTicketStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid guard source: {value} {location}")]
    InvalidGuardSource {
        value: String,
        location: ErrorLocation,
    },

    #[error("Storage IO error at {path}: {source} {location}")]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage file {path} is not a valid key-value document: {source} {location}")]
    StorageFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Storage lock poisoned {location}")]
    StoragePoisoned { location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
