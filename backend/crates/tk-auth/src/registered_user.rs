use tk_core::Identity;

use serde::Deserialize;

/// The record stored under the user key.
///
/// Unlike [`Identity`], a missing field stays missing instead of becoming an
/// empty string, and a missing field never matches any input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RegisteredUser {
    email: Option<String>,
    password: Option<String>,
}

impl RegisteredUser {
    /// Exact string comparison of both fields.
    pub(crate) fn matches(&self, email: &str, password: &str) -> bool {
        self.email.as_deref() == Some(email) && self.password.as_deref() == Some(password)
    }

    pub(crate) fn into_identity(self) -> Identity {
        Identity::new(
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}
