//! Classification of the raw value stored under the session key.
//!
//! Two formats exist in the wild:
//!
//! - current: a JSON identity record with non-empty `email` and `password`
//! - legacy: a bare string holding only the email
//!
//! Anything that is not a complete current record is read as legacy, with the
//! whole raw text as the email and an empty password. The stored value is not
//! rewritten: an identity with an empty password would not classify as
//! current on the next read either.

use tk_core::Identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistedSession {
    Current(Identity),
    Legacy(String),
}

impl PersistedSession {
    /// `None` for an empty value, which means "no session".
    pub fn classify(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let session = match serde_json::from_str::<Identity>(raw) {
            Ok(identity) if identity.is_complete() => Self::Current(identity),
            _ => Self::Legacy(raw.to_string()),
        };

        Some(session)
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    pub fn into_identity(self) -> Identity {
        match self {
            Self::Current(identity) => identity,
            Self::Legacy(email) => Identity::new(email, ""),
        }
    }
}
