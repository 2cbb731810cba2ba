use crate::Route;

/// Outcome of asking the guard whether a route may be entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(Route),
}

impl Navigation {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}
