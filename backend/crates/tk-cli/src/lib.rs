//! tk-cli library
//!
//! Wires the session store, ticket store and route guard over one storage
//! handle and exposes them as CLI commands.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ticket_commands;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use ticket_commands::TicketCommands;
