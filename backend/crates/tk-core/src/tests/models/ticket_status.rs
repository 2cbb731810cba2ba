use crate::{CoreError, TicketStatus};

use std::str::FromStr;

#[test]
fn test_ticket_status_as_str() {
    assert_eq!(TicketStatus::Open.as_str(), "open");
    assert_eq!(TicketStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TicketStatus::Closed.as_str(), "closed");
}

#[test]
fn test_ticket_status_from_str() {
    for status in TicketStatus::ALL {
        assert_eq!(TicketStatus::from_str(status.as_str()).unwrap(), status);
    }

    assert!(matches!(
        TicketStatus::from_str("done"),
        Err(CoreError::InvalidTicketStatus { .. })
    ));
    assert!(TicketStatus::from_str("Open").is_err());
}

#[test]
fn test_ticket_status_default() {
    assert_eq!(TicketStatus::default(), TicketStatus::Open);
}

#[test]
fn test_ticket_status_serializes_as_snake_case() {
    let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
}
