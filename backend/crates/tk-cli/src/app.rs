use crate::error::Result as CliErrorResult;
use crate::{CliError, Commands, TicketCommands};

use tk_auth::{Navigation, Route, RouteGuard, SessionStore};
use tk_core::{GuardSource, Identity, SharedStorage, Ticket, TicketStatus};
use tk_db::TicketStore;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde_json::{Value, json};

/// Application root: owns the stores built over one storage handle.
pub struct App {
    session: SessionStore,
    tickets: TicketStore,
    guard: RouteGuard,
}

impl App {
    pub fn open(storage: SharedStorage, guard_source: GuardSource) -> CliErrorResult<Self> {
        Ok(Self {
            session: SessionStore::open(storage.clone())?,
            tickets: TicketStore::open(storage.clone())?,
            guard: RouteGuard::new(storage, guard_source),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn tickets(&self) -> &TicketStore {
        &self.tickets
    }

    /// Run one command and return its JSON result.
    pub fn execute(&mut self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Signup { email, password } => {
                let identity = self.session.signup(&email, &password)?;
                Ok(Self::identity_json(identity))
            }
            Commands::Login { email, password } => {
                let identity = self.session.login(&email, &password)?;
                Ok(Self::identity_json(identity))
            }
            Commands::Logout => {
                self.session.logout()?;
                Ok(json!({ "authenticated": false }))
            }
            Commands::Whoami => Ok(match self.session.current() {
                Some(identity) => Self::identity_json(identity),
                None => json!({ "authenticated": false }),
            }),
            Commands::Ticket { action } => self.execute_ticket(action),
            Commands::Navigate { path } => self.navigate(&path),
        }
    }

    fn execute_ticket(&mut self, action: TicketCommands) -> CliErrorResult<Value> {
        match action {
            TicketCommands::Create {
                title,
                description,
                priority,
                status,
            } => {
                self.require(&Route::CreateTicket)?;

                let status = Self::parse_status(status.as_deref())?.unwrap_or_default();
                let mut ticket = Ticket::create(title, status);
                ticket.description = description;
                ticket.priority = priority;

                self.tickets.add(ticket.clone())?;
                Ok(serde_json::to_value(ticket)?)
            }
            TicketCommands::List { open, status } => {
                self.require(&Route::ManageTicket)?;

                let tickets: Vec<&Ticket> = match Self::parse_status(status.as_deref())? {
                    _ if open => self.tickets.open_tickets(),
                    Some(status) => self.tickets.by_status(status),
                    None => self.tickets.tickets().iter().collect(),
                };
                Ok(json!({ "tickets": tickets }))
            }
            TicketCommands::Get { id } => {
                self.require(&Route::EditTicket { id: id.clone() })?;

                let ticket = self
                    .tickets
                    .get(&id)
                    .ok_or_else(|| CliError::ticket_not_found(&id))?;
                Ok(serde_json::to_value(ticket)?)
            }
            TicketCommands::Update {
                id,
                title,
                description,
                priority,
                status,
            } => {
                self.require(&Route::EditTicket { id: id.clone() })?;

                let mut ticket = self
                    .tickets
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| CliError::ticket_not_found(&id))?;

                if let Some(title) = title {
                    ticket.title = title;
                }
                if let Some(description) = description {
                    ticket.description = Some(description).filter(|d| !d.is_empty());
                }
                if let Some(priority) = priority {
                    ticket.priority = Some(priority).filter(|p| !p.is_empty());
                }
                if let Some(status) = Self::parse_status(status.as_deref())? {
                    ticket.status = status;
                }

                self.tickets.update(ticket.clone())?;
                Ok(serde_json::to_value(ticket)?)
            }
            TicketCommands::Delete { id } => {
                self.require(&Route::ManageTicket)?;

                let removed = self.tickets.remove(&id)?;
                if removed == 0 {
                    return Err(CliError::ticket_not_found(&id));
                }
                Ok(json!({ "deleted": id, "count": removed }))
            }
            TicketCommands::Summary => {
                self.require(&Route::Dashboard)?;
                Ok(serde_json::to_value(self.tickets.summary())?)
            }
        }
    }

    fn navigate(&self, path: &str) -> CliErrorResult<Value> {
        let route = Route::parse(path).ok_or_else(|| CliError::unknown_route(path))?;

        let result = match self.guard.check(&route)? {
            Navigation::Allow => json!({
                "path": route.path(),
                "route": route.name(),
                "protected": route.is_protected(),
                "decision": "allow",
            }),
            Navigation::Redirect(target) => json!({
                "path": route.path(),
                "route": route.name(),
                "protected": route.is_protected(),
                "decision": "redirect",
                "redirect_to": target.path(),
            }),
        };

        Ok(result)
    }

    /// Run the guard for `route`; a redirect becomes an error.
    #[track_caller]
    fn require(&self, route: &Route) -> CliErrorResult<()> {
        match self.guard.check(route)? {
            Navigation::Allow => Ok(()),
            Navigation::Redirect(target) => Err(CliError::Redirected {
                from: route.path(),
                to: target.path(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn parse_status(status: Option<&str>) -> CliErrorResult<Option<TicketStatus>> {
        Ok(status.map(TicketStatus::from_str).transpose()?)
    }

    fn identity_json(identity: &Identity) -> Value {
        json!({ "authenticated": true, "email": identity.email })
    }
}
