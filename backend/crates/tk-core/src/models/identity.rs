use serde::{Deserialize, Serialize};

/// An email/password pair.
///
/// Used both for the single registered identity and for the session record.
/// Passwords are stored and compared as plain strings.
///
/// Missing fields deserialize as empty strings.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub email: String,
    pub password: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// True when both the email and the password are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

// Never print the password, even in debug logs.
impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
