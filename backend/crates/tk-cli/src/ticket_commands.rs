use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// Create a new ticket
    Create {
        /// Ticket title
        #[arg(long)]
        title: String,

        /// Ticket description
        #[arg(long)]
        description: Option<String>,

        /// Priority label, free text
        #[arg(long)]
        priority: Option<String>,

        /// Initial status (default: open)
        #[arg(long, value_parser = ["open", "in_progress", "closed"])]
        status: Option<String>,
    },

    /// List tickets
    List {
        /// Only tickets with status open
        #[arg(long, conflicts_with = "status")]
        open: bool,

        /// Filter by status
        #[arg(long, value_parser = ["open", "in_progress", "closed"])]
        status: Option<String>,
    },

    /// Get a ticket by ID
    Get {
        /// Ticket ID
        id: String,
    },

    /// Replace fields of a ticket
    Update {
        /// Ticket ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,

        /// New priority (empty string clears it)
        #[arg(long)]
        priority: Option<String>,

        /// New status
        #[arg(long, value_parser = ["open", "in_progress", "closed"])]
        status: Option<String>,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: String,
    },

    /// Per-status counters
    Summary,
}
