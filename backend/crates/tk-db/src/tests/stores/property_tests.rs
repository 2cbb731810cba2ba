use crate::TicketStore;

use tk_core::{MemoryStorage, SharedStorage, Ticket, TicketStatus};

use std::sync::Arc;

use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(Ticket),
    Update(Ticket),
    Remove(String),
}

// A small id space so updates and removes regularly hit existing tickets.
fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("1"), Just("2"), Just("3"), Just("4")].prop_map(String::from)
}

fn status_strategy() -> impl Strategy<Value = TicketStatus> {
    prop_oneof![
        Just(TicketStatus::Open),
        Just(TicketStatus::InProgress),
        Just(TicketStatus::Closed),
    ]
}

fn ticket_strategy() -> impl Strategy<Value = Ticket> {
    (
        id_strategy(),
        "[a-zA-Z ]{1,12}",
        status_strategy(),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(prop_oneof![Just("low"), Just("high")]),
    )
        .prop_map(|(id, title, status, description, priority)| {
            let mut ticket = Ticket::new(id, title, status, "2026-01-01T00:00:00Z");
            ticket.description = description;
            ticket.priority = priority.map(String::from);
            ticket
        })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ticket_strategy().prop_map(Op::Add),
        ticket_strategy().prop_map(Op::Update),
        id_strategy().prop_map(Op::Remove),
    ]
}

fn apply(store: &mut TicketStore, op: Op) {
    match op {
        Op::Add(ticket) => store.add(ticket).unwrap(),
        Op::Update(ticket) => {
            store.update(ticket).unwrap();
        }
        Op::Remove(id) => {
            store.remove(&id).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn given_any_mutations_when_reopened_then_same_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut store = TicketStore::open(storage.clone()).unwrap();

        for op in ops {
            apply(&mut store, op);
        }

        let reopened = TicketStore::open(storage).unwrap();
        prop_assert_eq!(reopened.tickets(), store.tickets());
    }

    #[test]
    fn given_any_mutations_when_reading_open_view_then_equals_open_subsequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = TicketStore::open(Arc::new(MemoryStorage::new())).unwrap();

        for op in ops {
            apply(&mut store, op);

            let expected: Vec<&Ticket> = store
                .tickets()
                .iter()
                .filter(|t| t.status == TicketStatus::Open)
                .collect();
            prop_assert_eq!(store.open_tickets(), expected);
        }
    }

    #[test]
    fn given_unmatched_id_when_updated_then_sequence_unchanged(
        ops in prop::collection::vec(op_strategy(), 0..20),
        title in "[a-z]{1,8}",
    ) {
        let mut store = TicketStore::open(Arc::new(MemoryStorage::new())).unwrap();
        for op in ops {
            apply(&mut store, op);
        }
        let before = store.tickets().to_vec();

        let updated = store
            .update(Ticket::new("not-an-id", title, TicketStatus::Open, "t"))
            .unwrap();

        prop_assert!(!updated);
        prop_assert_eq!(store.tickets(), before.as_slice());
    }
}
