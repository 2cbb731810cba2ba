use crate::{DbError, TicketStore};

use tk_core::storage_keys::TICKETS_KEY;
use tk_core::{KeyValueStorage, MemoryStorage, SharedStorage, Ticket, TicketStatus};

use std::sync::Arc;

use googletest::prelude::*;

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn ticket(id: &str, title: &str, status: TicketStatus) -> Ticket {
    Ticket::new(id, title, status, format!("t{id}"))
}

#[test]
fn given_no_persisted_list_when_opened_then_empty() {
    let store = TicketStore::open(memory()).unwrap();

    assert!(store.is_empty());
    assert_that!(store.open_tickets(), is_empty());
}

#[test]
fn given_empty_persisted_value_when_opened_then_empty_list() {
    let storage = memory();
    storage.set_item(TICKETS_KEY, "").unwrap();

    let store = TicketStore::open(storage).unwrap();

    assert!(store.is_empty());
}

#[test]
fn given_corrupt_list_when_opened_then_corrupt_error() {
    let storage = memory();
    storage.set_item(TICKETS_KEY, "{not an array").unwrap();

    let result = TicketStore::open(storage);

    assert!(matches!(
        result,
        Err(DbError::Corrupt {
            key: TICKETS_KEY,
            ..
        })
    ));
}

#[test]
fn given_ticket_added_when_reading_storage_then_whole_list_is_written() {
    let storage = memory();
    let mut store = TicketStore::open(storage.clone()).unwrap();

    store.add(ticket("1", "A", TicketStatus::Open)).unwrap();

    let raw = storage.get_item(TICKETS_KEY).unwrap().unwrap();
    assert_that!(
        raw,
        eq(r#"[{"id":"1","title":"A","status":"open","createdAt":"t1"}]"#)
    );
}

#[test]
fn given_add_order_when_listing_then_insertion_order_kept() {
    let mut store = TicketStore::open(memory()).unwrap();

    store.add(ticket("b", "B", TicketStatus::Open)).unwrap();
    store.add(ticket("a", "A", TicketStatus::Open)).unwrap();
    store.add(ticket("c", "C", TicketStatus::Closed)).unwrap();

    let ids: Vec<&str> = store.tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn given_two_tickets_when_removed_and_reopened_then_open_view_tracks_changes() {
    let mut store = TicketStore::open(memory()).unwrap();

    store.add(ticket("1", "A", TicketStatus::Open)).unwrap();
    store.add(ticket("2", "B", TicketStatus::Closed)).unwrap();

    let open: Vec<&str> = store.open_tickets().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(open, vec!["1"]);

    store.remove("1").unwrap();
    assert_that!(store.len(), eq(1));
    assert_that!(store.tickets()[0].id.as_str(), eq("2"));

    store
        .update(Ticket::new("2", "B2", TicketStatus::Open, "t2"))
        .unwrap();

    let open = store.open_tickets();
    assert_that!(open.len(), eq(1));
    assert_that!(open[0].id.as_str(), eq("2"));
    assert_that!(open[0].title.as_str(), eq("B2"));
}

#[test]
fn given_unknown_id_when_updated_then_list_unchanged_and_nothing_written() {
    let storage = memory();
    let mut store = TicketStore::open(storage.clone()).unwrap();
    store.add(ticket("1", "A", TicketStatus::Open)).unwrap();
    storage.remove_item(TICKETS_KEY).unwrap();
    let before = store.tickets().to_vec();

    let updated = store
        .update(ticket("missing", "X", TicketStatus::Closed))
        .unwrap();

    assert!(!updated);
    assert_that!(store.tickets(), eq(before.as_slice()));
    assert_that!(storage.get_item(TICKETS_KEY).unwrap(), none());
}

#[test]
fn given_duplicate_ids_when_updated_then_only_first_replaced() {
    let mut store = TicketStore::open(memory()).unwrap();
    store.add(ticket("dup", "First", TicketStatus::Open)).unwrap();
    store.add(ticket("dup", "Second", TicketStatus::Open)).unwrap();

    store
        .update(ticket("dup", "Replaced", TicketStatus::Closed))
        .unwrap();

    assert_that!(store.tickets()[0].title.as_str(), eq("Replaced"));
    assert_that!(store.tickets()[1].title.as_str(), eq("Second"));
}

#[test]
fn given_duplicate_ids_when_removed_then_all_dropped() {
    let mut store = TicketStore::open(memory()).unwrap();
    store.add(ticket("dup", "First", TicketStatus::Open)).unwrap();
    store.add(ticket("keep", "Keep", TicketStatus::Open)).unwrap();
    store.add(ticket("dup", "Second", TicketStatus::Closed)).unwrap();

    let removed = store.remove("dup").unwrap();

    assert_that!(removed, eq(2));
    assert_that!(store.len(), eq(1));
    assert_that!(store.get("keep"), some(anything()));
}

#[test]
fn given_unknown_id_when_removed_then_zero() {
    let mut store = TicketStore::open(memory()).unwrap();
    store.add(ticket("1", "A", TicketStatus::Open)).unwrap();

    assert_that!(store.remove("nope").unwrap(), eq(0));
    assert_that!(store.len(), eq(1));
}

#[test]
fn given_mixed_statuses_when_summarized_then_counts_match() {
    let mut store = TicketStore::open(memory()).unwrap();
    store.add(ticket("1", "A", TicketStatus::Open)).unwrap();
    store.add(ticket("2", "B", TicketStatus::InProgress)).unwrap();
    store.add(ticket("3", "C", TicketStatus::InProgress)).unwrap();

    let summary = store.summary();

    assert_that!(summary.total, eq(3));
    assert_that!(summary.open, eq(1));
    assert_that!(summary.in_progress, eq(2));
    assert_that!(summary.closed, eq(0));
    assert_that!(store.by_status(TicketStatus::InProgress).len(), eq(2));
}

#[test]
fn given_shared_handle_when_store_reopened_then_sees_previous_writes() {
    let storage: SharedStorage = memory();
    let mut store = TicketStore::open(storage.clone()).unwrap();
    store
        .add(ticket("1", "A", TicketStatus::Open).with_priority("low"))
        .unwrap();

    let reopened = TicketStore::open(storage).unwrap();

    assert_that!(reopened.tickets(), eq(store.tickets()));
}
