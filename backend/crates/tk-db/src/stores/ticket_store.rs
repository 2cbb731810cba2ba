use crate::{DbError, Result as DbErrorResult};

use tk_core::storage_keys::TICKETS_KEY;
use tk_core::{SharedStorage, Ticket, TicketStatus, TicketSummary};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// The ticket list, mirrored into storage under the `tickets` key.
///
/// Built once at the application root and handed to whoever needs it.
/// Insertion order is kept. Every mutation that changes the list writes the
/// whole list back; there are no partial writes and no versioning.
pub struct TicketStore {
    storage: SharedStorage,
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Load the persisted list. A missing or empty value is an empty list.
    pub fn open(storage: SharedStorage) -> DbErrorResult<Self> {
        let stored = storage
            .get_item(TICKETS_KEY)?
            .filter(|raw| !raw.is_empty());
        let tickets = match stored {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| DbError::Corrupt {
                key: TICKETS_KEY,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?,
            None => Vec::new(),
        };

        let store = Self { storage, tickets };
        debug!("Loaded {} tickets", store.tickets.len());

        Ok(store)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a ticket. The id is taken as given.
    pub fn add(&mut self, ticket: Ticket) -> DbErrorResult<()> {
        debug!("Adding ticket {}", ticket.id);
        self.tickets.push(ticket);
        self.persist()
    }

    /// Replace the first ticket whose id matches.
    ///
    /// Returns `false`, without touching storage, when nothing matched.
    pub fn update(&mut self, ticket: Ticket) -> DbErrorResult<bool> {
        let Some(slot) = self.tickets.iter_mut().find(|t| t.id == ticket.id) else {
            debug!("Update skipped, no ticket with id {}", ticket.id);
            return Ok(false);
        };

        debug!("Updating ticket {}", ticket.id);
        *slot = ticket;
        self.persist()?;

        Ok(true)
    }

    /// Drop every ticket with this id and return how many went.
    pub fn remove(&mut self, id: &str) -> DbErrorResult<usize> {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        let removed = before - self.tickets.len();

        if removed > 0 {
            debug!("Removed {removed} ticket(s) with id {id}");
            self.persist()?;
        }

        Ok(removed)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Tickets with status `open`, in list order. Computed on every call.
    pub fn open_tickets(&self) -> Vec<&Ticket> {
        self.by_status(TicketStatus::Open)
    }

    pub fn by_status(&self, status: TicketStatus) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.status == status).collect()
    }

    /// First ticket with this id.
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn summary(&self) -> TicketSummary {
        TicketSummary::from_tickets(&self.tickets)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    fn persist(&self) -> DbErrorResult<()> {
        let raw = serde_json::to_string(&self.tickets).map_err(|e| DbError::Serialize {
            key: TICKETS_KEY,
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.storage.set_item(TICKETS_KEY, &raw)?;
        Ok(())
    }
}
