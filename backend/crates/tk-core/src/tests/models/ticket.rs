use crate::{Ticket, TicketStatus};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_minimal_ticket_when_serialized_then_optional_fields_are_omitted() {
    let ticket = Ticket::new("1", "A", TicketStatus::Open, "t1");

    let value = serde_json::to_value(&ticket).unwrap();

    assert_that!(
        value,
        eq(&json!({
            "id": "1",
            "title": "A",
            "status": "open",
            "createdAt": "t1"
        }))
    );
}

#[test]
fn given_full_ticket_when_serialized_then_uses_camel_case_field_names() {
    let ticket = Ticket::new("7", "Printer jam", TicketStatus::InProgress, "2026-01-01")
        .with_description("Tray 2")
        .with_priority("high");

    let value = serde_json::to_value(&ticket).unwrap();

    assert_that!(value["createdAt"], eq(&json!("2026-01-01")));
    assert_that!(value["description"], eq(&json!("Tray 2")));
    assert_that!(value["priority"], eq(&json!("high")));
    assert_that!(value["status"], eq(&json!("in_progress")));
}

#[test]
fn given_browser_written_record_when_deserialized_then_matches() {
    let raw = r#"{"id":"2","title":"B","status":"closed","createdAt":"t2"}"#;

    let ticket: Ticket = serde_json::from_str(raw).unwrap();

    assert_that!(ticket, eq(&Ticket::new("2", "B", TicketStatus::Closed, "t2")));
}

#[test]
fn given_unknown_status_when_deserialized_then_fails() {
    let raw = r#"{"id":"2","title":"B","status":"done","createdAt":"t2"}"#;

    let result = serde_json::from_str::<Ticket>(raw);

    assert!(result.is_err());
}

#[test]
fn test_ticket_create_assigns_id_and_timestamp() {
    let first = Ticket::create("Title", TicketStatus::Open);
    let second = Ticket::create("Title", TicketStatus::Open);

    assert_ne!(first.id, second.id);
    assert!(chrono::DateTime::parse_from_rfc3339(&first.created_at).is_ok());
    assert!(first.is_open());
}
