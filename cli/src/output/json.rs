//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON object on
//! stdout: a result object on success or an error object on failure.
//! Verbose subprocess output is sent to stderr in this mode.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::services::install::InstallOutcome;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

#[derive(Serialize)]
struct InstallJson<'a> {
    url: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct UninstallJson<'a> {
    uninstalled: bool,
    host: &'a str,
}

#[derive(Serialize)]
struct VersionJson<'a> {
    version: &'a str,
}

/// Renders command results as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_json(&VersionJson { version })
    }

    /// Render the access details of a fresh install.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_install(&self, outcome: &InstallOutcome) -> Result<()> {
        print_json(&InstallJson {
            url: &outcome.url,
            username: outcome.username,
            password: &outcome.password,
        })
    }

    /// Render the result of an uninstall.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_uninstall(&self, host: &str) -> Result<()> {
        print_json(&UninstallJson {
            uninstalled: true,
            host,
        })
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}
