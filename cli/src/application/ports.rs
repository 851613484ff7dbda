//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// What happens to a child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stream to the invoking terminal (`--verbose`).
    Inherit,
    /// Stream both to the invoking stderr, keeping stdout for JSON output.
    Stderr,
    /// Discard.
    Discard,
}

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and return its exit status.
    ///
    /// stdin is always inherited: the playbook may prompt for a privilege
    /// escalation password. No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(&self, program: &str, args: &[&str], stdio: StdioMode)
    -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem Ports ──────────────────────────────────────────────────────────

/// Existence checks against the local filesystem.
pub trait PathProbe {
    /// Returns `true` if `path` names an existing filesystem entry.
    fn exists(&self, path: &Path) -> bool;
}

/// A temporary log file owned by one operation.
///
/// Dropping the handle removes the file.
pub trait TempLog {
    /// Location of the log file.
    fn path(&self) -> &Path;
    /// Remove the file now, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be deleted.
    fn remove(self) -> Result<()>;
}

/// Creates temporary log files.
pub trait TempLogStore {
    type Log: TempLog;

    /// Create a fresh, empty log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    fn create(&self) -> Result<Self::Log>;
}
