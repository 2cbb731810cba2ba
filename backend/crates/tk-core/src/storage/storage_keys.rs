/// The single registered identity, written by signup.
pub const USER_KEY: &str = "ticketapp_user";

/// The logged-in identity; removed on logout.
pub const SESSION_KEY: &str = "ticketapp_session";

/// JSON array of every ticket.
pub const TICKETS_KEY: &str = "tickets";

/// Opaque flag set by an external collaborator, read by the legacy guard.
pub const AUTH_TOKEN_KEY: &str = "authToken";
