use crate::{CoreError, GuardSource};

use std::str::FromStr;

#[test]
fn test_guard_source_storage_keys() {
    assert_eq!(GuardSource::Session.storage_key(), "ticketapp_session");
    assert_eq!(GuardSource::AuthToken.storage_key(), "authToken");
}

#[test]
fn test_guard_source_from_str() {
    assert_eq!(
        GuardSource::from_str("session").unwrap(),
        GuardSource::Session
    );
    assert_eq!(
        GuardSource::from_str("auth_token").unwrap(),
        GuardSource::AuthToken
    );
    assert!(matches!(
        GuardSource::from_str("authToken"),
        Err(CoreError::InvalidGuardSource { .. })
    ));
}

#[test]
fn test_guard_source_default_is_session() {
    assert_eq!(GuardSource::default(), GuardSource::Session);
}
