pub mod error;
pub mod models;
pub mod storage;

pub use error::{CoreError, Result};
pub use models::guard_source::GuardSource;
pub use models::identity::Identity;
pub use models::ticket::Ticket;
pub use models::ticket_status::TicketStatus;
pub use models::ticket_summary::TicketSummary;
pub use storage::file_storage::FileStorage;
pub use storage::memory_storage::MemoryStorage;
pub use storage::storage_keys;
pub use storage::{KeyValueStorage, SharedStorage};

pub use error_location::ErrorLocation;
