//! Environment-derived defaults for the resource identifier.

use std::env;

/// Environment variable consulted for the default project id.
pub const ENV_PROJECT_ID: &str = "SPANNER_PROJECT_ID";
/// Environment variable consulted for the default instance id.
pub const ENV_INSTANCE_ID: &str = "SPANNER_INSTANCE_ID";
/// Environment variable consulted for the default database id.
pub const ENV_DATABASE_ID: &str = "SPANNER_DATABASE_ID";

/// Fallback ids captured from the environment at the binary boundary.
///
/// Resolution never touches the process environment itself; it sees only
/// this record, so [`crate::ids::resolve`] stays a pure function of its
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDefaults {
    pub project: Option<String>,
    pub instance: Option<String>,
    pub database: Option<String>,
}

impl EnvDefaults {
    /// Captures the three `SPANNER_*` variables. Unset and empty values are
    /// both treated as absent.
    pub fn from_env() -> Self {
        Self {
            project: non_empty_var(ENV_PROJECT_ID),
            instance: non_empty_var(ENV_INSTANCE_ID),
            database: non_empty_var(ENV_DATABASE_ID),
        }
    }

    /// Builds a defaults record from literal values.
    pub fn new(project: Option<&str>, instance: Option<&str>, database: Option<&str>) -> Self {
        Self {
            project: project.map(str::to_string),
            instance: instance.map(str::to_string),
            database: database.map(str::to_string),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
