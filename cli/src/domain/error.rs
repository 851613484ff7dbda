//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving an install or uninstall configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the current user. Pass --targetUsername explicitly.")]
    UnknownUser,

    #[error("Could not determine the home directory. Pass --ssh-key explicitly.")]
    UnknownHome,

    #[error("Could not generate the initial password: {0}")]
    PasswordGeneration(String),
}

impl ConfigError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownUser => "UNKNOWN_USER",
            Self::UnknownHome => "UNKNOWN_HOME",
            Self::PasswordGeneration(_) => "PASSWORD_GENERATION_FAILED",
        }
    }
}

// ── Preflight errors ──────────────────────────────────────────────────────────

/// A required local artifact is missing.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("Could not find execution-environment.tar at {}", .0.display())]
    ExecutionEnvironmentNotFound(PathBuf),

    #[error("Could not find ssh key at {}", .0.display())]
    SshKeyNotFound(PathBuf),

    #[error("Could not find image-archive.tar at {}", .0.display())]
    ImageArchiveNotFound(PathBuf),
}

impl PreflightError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExecutionEnvironmentNotFound(_) => "EXECUTION_ENVIRONMENT_NOT_FOUND",
            Self::SshKeyNotFound(_) => "SSH_KEY_NOT_FOUND",
            Self::ImageArchiveNotFound(_) => "IMAGE_ARCHIVE_NOT_FOUND",
        }
    }
}

// ── Runner errors ─────────────────────────────────────────────────────────────

/// An external process could not be started or did not exit successfully.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{step} could not be started")]
    Spawn {
        step: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{step} failed ({})", describe_exit(.code.as_ref().copied()))]
    Exited { step: &'static str, code: Option<i32> },
}

impl RunnerError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spawn { .. } | Self::Exited { .. } => "SUBPROCESS_FAILED",
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |c| format!("exit status {c}"),
    )
}
