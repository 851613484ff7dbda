//! Facts about the invoking host used to default unset options.

use crate::domain::config::HostDefaults;

/// Read the invoking user (`$USER`) and home directory.
#[must_use]
pub fn host_defaults() -> HostDefaults {
    HostDefaults {
        username: std::env::var("USER").ok().filter(|u| !u.is_empty()),
        home_dir: dirs::home_dir(),
    }
}
