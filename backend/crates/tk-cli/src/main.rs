//! tk - support ticket desk CLI
//!
//! # Examples
//!
//! ```bash
//! # Register and log in
//! tk signup me@example.com hunter2
//!
//! # Create a ticket
//! tk ticket create --title "Printer jam" --priority high
//!
//! # Close it
//! tk ticket update <id> --status closed
//!
//! # Would the dashboard let us in?
//! tk navigate /dashboard --pretty
//! ```

use tk_cli::{App, Cli, CliResult, logger};
use tk_config::Config;
use tk_core::FileStorage;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;
use serde_json::Value;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let pretty = cli.pretty;
    let result = run(cli);

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let storage_path = match cli.storage {
        Some(path) => path,
        None => config.storage_path()?,
    };
    let storage = Arc::new(FileStorage::open(storage_path)?);

    let mut app = App::open(storage, config.auth.guard_source)?;
    app.execute(cli.command)
}
