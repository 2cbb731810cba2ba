use tk_auth::AuthError;
use tk_config::ConfigError;
use tk_core::{CoreError, ErrorLocation};
use tk_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Ticket storage error: {source}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Not logged in: {from} redirected to {to} {location}")]
    Redirected {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("Ticket not found: {id} {location}")]
    TicketNotFound { id: String, location: ErrorLocation },

    #[error("Unknown route: {path} {location}")]
    UnknownRoute { path: String, location: ErrorLocation },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Text for stderr. Auth failures show only their human-readable message.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Auth { source, .. } => source.user_message().to_string(),
            other => other.to_string(),
        }
    }

    #[track_caller]
    pub fn ticket_not_found(id: &str) -> Self {
        CliError::TicketNotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_route(path: &str) -> Self {
        CliError::UnknownRoute {
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for CliError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        CliError::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CliError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        CliError::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        CliError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
