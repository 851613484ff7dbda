//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::install::InstallOutcome;
use crate::output::OutputContext;

/// Renders command results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("mirror-registry {version}");
    }

    /// Render the access details of a fresh install.
    ///
    /// The credentials are printed even with `--quiet`: they are the only
    /// place the generated password is ever shown.
    pub fn render_install(&self, outcome: &InstallOutcome) {
        println!();
        println!(
            "  Quay is available at {} with credentials ({}, {})",
            outcome.url.style(self.ctx.styles.bold),
            outcome.username,
            outcome.password.style(self.ctx.styles.bold),
        );
    }

    /// Render the result of an uninstall.
    pub fn render_uninstall(&self, host: &str) {
        self.ctx.info(&format!("Quay removed from {host}"));
    }
}
