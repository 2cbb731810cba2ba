pub mod error;
pub mod navigation;
pub mod persisted_session;
mod registered_user;
pub mod route;
pub mod route_guard;
pub mod session_store;

pub use error::{AuthError, Result};
pub use navigation::Navigation;
pub use persisted_session::PersistedSession;
pub use route::Route;
pub use route_guard::RouteGuard;
pub use session_store::SessionStore;
