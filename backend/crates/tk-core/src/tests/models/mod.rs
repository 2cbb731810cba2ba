mod guard_source;
mod ticket;
mod ticket_status;
