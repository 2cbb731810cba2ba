use crate::{KeyValueStorage, MemoryStorage};

use googletest::prelude::*;

#[test]
fn given_empty_storage_when_get_then_none() {
    let storage = MemoryStorage::new();

    assert_that!(storage.get_item("tickets").unwrap(), none());
    assert!(storage.is_empty().unwrap());
}

#[test]
fn given_value_set_when_get_then_returns_latest_value() {
    let storage = MemoryStorage::new();

    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();

    assert_that!(storage.get_item("k").unwrap(), some(eq("two")));
    assert_that!(storage.len().unwrap(), eq(1));
}

#[test]
fn given_value_removed_when_get_then_none() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "v").unwrap();

    storage.remove_item("k").unwrap();
    storage.remove_item("never-set").unwrap();

    assert_that!(storage.get_item("k").unwrap(), none());
}
