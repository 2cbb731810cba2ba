use crate::{Ticket, TicketStatus};

use serde::Serialize;

/// Per-status ticket counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketSummary {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        tickets
            .into_iter()
            .fold(Self::default(), |mut summary, ticket| {
                summary.total += 1;
                match ticket.status {
                    TicketStatus::Open => summary.open += 1,
                    TicketStatus::InProgress => summary.in_progress += 1,
                    TicketStatus::Closed => summary.closed += 1,
                }
                summary
            })
    }
}
