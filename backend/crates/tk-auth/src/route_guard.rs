use crate::{Navigation, Result as AuthErrorResult, Route};

use tk_core::{GuardSource, SharedStorage};

use log::{debug, warn};

/// Decides whether a route may be entered.
///
/// A visitor counts as authenticated when the storage flag selected by
/// [`GuardSource`] is present and non-empty. With [`GuardSource::Session`] that
/// flag is the session record itself, so the guard and the session store
/// always agree.
pub struct RouteGuard {
    storage: SharedStorage,
    source: GuardSource,
}

impl RouteGuard {
    pub fn new(storage: SharedStorage, source: GuardSource) -> Self {
        Self { storage, source }
    }

    pub fn is_authenticated(&self) -> AuthErrorResult<bool> {
        let flag = self.storage.get_item(self.source.storage_key())?;
        Ok(Self::flag_is_set(flag.as_deref()))
    }

    /// Public routes always pass. Protected routes redirect to login unless
    /// the flag is set.
    pub fn check(&self, route: &Route) -> AuthErrorResult<Navigation> {
        if !route.is_protected() {
            return Ok(Navigation::Allow);
        }

        if self.is_authenticated()? {
            debug!("Guard allowed {route}");
            Ok(Navigation::Allow)
        } else {
            warn!(
                "Guard redirected {route} to {} ({} flag not set)",
                Route::Login,
                self.source
            );
            Ok(Navigation::Redirect(Route::Login))
        }
    }

    /// Present and non-empty.
    pub fn flag_is_set(flag: Option<&str>) -> bool {
        flag.is_some_and(|value| !value.is_empty())
    }
}
