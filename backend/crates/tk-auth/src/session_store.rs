use crate::registered_user::RegisteredUser;
use crate::{AuthError, PersistedSession, Result as AuthErrorResult};

use tk_core::storage_keys::{SESSION_KEY, USER_KEY};
use tk_core::{Identity, SharedStorage};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info, warn};

/// The logged-in identity plus the single registered account.
///
/// Construct once at the application root and pass it to whatever needs the
/// session. Every mutating call writes through to storage before returning.
pub struct SessionStore {
    storage: SharedStorage,
    current: Option<Identity>,
}

impl SessionStore {
    /// Restore the session persisted by a previous run, if any.
    pub fn open(storage: SharedStorage) -> AuthErrorResult<Self> {
        let current = match storage.get_item(SESSION_KEY)? {
            Some(raw) => PersistedSession::classify(&raw).map(|session| {
                if session.is_legacy() {
                    warn!("Restoring legacy session record as an email-only identity");
                }
                session.into_identity()
            }),
            None => None,
        };

        debug!("Session restored: {}", current.is_some());

        Ok(Self { storage, current })
    }

    /// Register `email`/`password` as the only account and log it in.
    ///
    /// Any previously registered account is overwritten.
    pub fn signup(&mut self, email: &str, password: &str) -> AuthErrorResult<&Identity> {
        let identity = Identity::new(email, password);
        let raw = Self::serialize(&identity)?;

        self.storage.set_item(USER_KEY, &raw)?;
        self.storage.set_item(SESSION_KEY, &raw)?;
        info!("Signed up {}", identity.email);

        Ok(&*self.current.insert(identity))
    }

    /// Check the credentials against the registered account.
    ///
    /// # Errors
    /// - [`AuthError::UserNotFound`] when nobody has signed up
    /// - [`AuthError::InvalidCredentials`] when either field differs or is
    ///   missing from the stored record
    #[track_caller]
    pub fn login(&mut self, email: &str, password: &str) -> AuthErrorResult<&Identity> {
        let Some(registered) = self.read_registered()? else {
            return Err(AuthError::UserNotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if !registered.matches(email, password) {
            warn!("Rejected login for {email}");
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let identity = registered.into_identity();
        self.storage
            .set_item(SESSION_KEY, &Self::serialize(&identity)?)?;
        info!("Logged in {}", identity.email);

        Ok(&*self.current.insert(identity))
    }

    /// Forget the session. The registered account stays, so a later login works.
    pub fn logout(&mut self) -> AuthErrorResult<()> {
        if let Some(identity) = self.current.take() {
            info!("Logged out {}", identity.email);
        }
        self.storage.remove_item(SESSION_KEY)?;
        Ok(())
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The account written by the last signup, if any.
    #[track_caller]
    pub fn registered_identity(&self) -> AuthErrorResult<Option<Identity>> {
        Ok(self.read_registered()?.map(RegisteredUser::into_identity))
    }

    /// An empty value counts as no account.
    #[track_caller]
    fn read_registered(&self) -> AuthErrorResult<Option<RegisteredUser>> {
        let stored = self
            .storage
            .get_item(USER_KEY)?
            .filter(|raw| !raw.is_empty());
        let Some(raw) = stored else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::CorruptRecord {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn serialize(identity: &Identity) -> AuthErrorResult<String> {
        serde_json::to_string(identity).map_err(|e| AuthError::Serialize {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
