pub mod error;
pub mod stores;

pub use error::{DbError, Result};
pub use stores::ticket_store::TicketStore;
