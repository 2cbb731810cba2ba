const EDIT_TICKET_PREFIX: &str = "/edit-ticket/";

/// Every view the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    // Public
    Landing,
    Login,
    CreateAccount,

    // Protected
    CreateTicket,
    Dashboard,
    ManageTicket,
    EditTicket { id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::CreateAccount => "/create-account".to_string(),
            Self::CreateTicket => "/create-ticket".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::ManageTicket => "/manage-ticket".to_string(),
            Self::EditTicket { id } => format!("{EDIT_TICKET_PREFIX}{id}"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Landing => "LandingPage",
            Self::Login => "Login",
            Self::CreateAccount => "CreateAccount",
            Self::CreateTicket => "CreateTicket",
            Self::Dashboard => "Dashboard",
            Self::ManageTicket => "ManageTicket",
            Self::EditTicket { .. } => "EditTicket",
        }
    }

    /// Protected routes require the guard's approval.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Landing | Self::Login | Self::CreateAccount)
    }

    /// Match a URL path against the route table.
    ///
    /// Query strings, fragments and a trailing slash are ignored. Returns
    /// `None` for paths outside the table.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/create-account" => Self::CreateAccount,
            "/create-ticket" => Self::CreateTicket,
            "/dashboard" => Self::Dashboard,
            "/manage-ticket" => Self::ManageTicket,
            other => {
                let id = other.strip_prefix(EDIT_TICKET_PREFIX)?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Self::EditTicket { id: id.to_string() }
            }
        };

        Some(route)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
