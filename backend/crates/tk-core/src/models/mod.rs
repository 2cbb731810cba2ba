pub mod guard_source;
pub mod identity;
pub mod ticket;
pub mod ticket_status;
pub mod ticket_summary;
