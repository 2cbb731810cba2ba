use serde::Deserialize;
use tk_core::GuardSource;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Storage flag the route guard reads
    pub guard_source: GuardSource,
}
