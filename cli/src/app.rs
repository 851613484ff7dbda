//! Application context — unified state passed to every command handler.

use crate::application::ports::StdioMode;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::LocalFs;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
#[allow(clippy::struct_excessive_bools)]
pub struct AppFlags {
    /// Stream subprocess output to the terminal.
    pub verbose: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Log filter used when `RUST_LOG` is unset. Preflight findings log at `info`.
#[must_use]
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Whether subprocess output is streamed to the terminal.
    pub verbose: bool,
    /// Process runner for the container runtime.
    pub runner: TokioCommandRunner,
    /// Local filesystem access.
    pub fs: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// JSON mode implies quiet progress output so stdout holds a single
    /// JSON document.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet || flags.json),
            mode,
            verbose: flags.verbose,
            runner: TokioCommandRunner::new(),
            fs: LocalFs,
        }
    }

    /// How subprocess stdout/stderr are wired for this invocation.
    ///
    /// In JSON mode verbose output goes to stderr so stdout carries only the
    /// JSON document.
    #[must_use]
    pub fn stdio(&self) -> StdioMode {
        match (self.verbose, self.mode) {
            (false, _) => StdioMode::Discard,
            (true, OutputMode::Human) => StdioMode::Inherit,
            (true, OutputMode::Json) => StdioMode::Stderr,
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
