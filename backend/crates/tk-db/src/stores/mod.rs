pub mod ticket_store;
