use crate::models::ticket_status::TicketStatus;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A support ticket as it is persisted under the `tickets` key.
///
/// Field names serialize in camelCase (`createdAt`) and absent optional
/// fields are omitted, so the stored array stays compatible with records
/// written by the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Caller-assigned identifier. The store does not enforce uniqueness.
    pub id: String,

    // Core fields
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Workflow
    pub status: TicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    // Audit
    pub created_at: String,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: TicketStatus,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status,
            priority: None,
            created_at: created_at.into(),
        }
    }

    /// Create a ticket with a fresh UUID v4 id and an RFC 3339 `created_at`.
    pub fn create(title: impl Into<String>, status: TicketStatus) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            title,
            status,
            Utc::now().to_rfc3339(),
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}
