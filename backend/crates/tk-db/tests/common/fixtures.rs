#![allow(dead_code)]

use tk_core::{Ticket, TicketStatus};

/// Creates a test Ticket with sensible defaults
pub fn create_test_ticket(id: &str) -> Ticket {
    Ticket::new(id, format!("Ticket {id}"), TicketStatus::Open, "2026-01-01T00:00:00Z")
        .with_description("Test description")
        .with_priority("medium")
}

/// Creates a test Ticket with the given status
pub fn create_test_ticket_with_status(id: &str, status: TicketStatus) -> Ticket {
    let mut ticket = create_test_ticket(id);
    ticket.status = status;
    ticket
}
