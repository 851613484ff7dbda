//! Application services — use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports` — never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

use std::path::Path;

use crate::application::ports::{ProgressReporter, StdioMode};

pub mod execution;
pub mod install;
pub mod preflight;
pub mod uninstall;

/// Per-invocation settings shared by the install and uninstall services.
pub struct OperationContext<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    /// Directory holding the running executable and its bundled archives.
    pub exec_dir: &'a Path,
    pub stdio: StdioMode,
}
