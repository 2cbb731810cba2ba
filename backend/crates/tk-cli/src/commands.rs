use crate::ticket_commands::TicketCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the (single) account and log it in
    Signup {
        email: String,
        password: String,
    },

    /// Log in with the registered account
    Login {
        email: String,
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Ticket operations (require a session)
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Ask the route guard whether a path may be entered
    Navigate {
        /// Route path, e.g. /dashboard or /edit-ticket/<id>
        path: String,
    },
}
