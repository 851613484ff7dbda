//! Application service — the external process steps shared by install and
//! uninstall: loading the execution environment, running a playbook, and
//! removing the temporary log afterwards.

use anyhow::{Context, Result};

use crate::application::ports::{
    CommandRunner, ProgressReporter, StdioMode, TempLog, TempLogStore,
};
use crate::domain::command::{ComposedCommand, Invocation, load_invocation};
use crate::domain::config::ExecutionContext;
use crate::domain::error::RunnerError;

/// Load the execution-environment image into the container runtime.
///
/// Runs on every invocation, whether or not the image is already present.
///
/// # Errors
///
/// Returns an error if `podman load` cannot be spawned or exits non-zero.
pub async fn load_environment(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    ctx: &ExecutionContext,
    stdio: StdioMode,
) -> Result<()> {
    reporter.step("loading execution environment from execution-environment.tar...");
    run_step(runner, &load_invocation(&ctx.execution_environment), "image load", stdio).await?;
    reporter.success("execution environment loaded");
    Ok(())
}

/// Execute a composed playbook run. Consumes the command: it runs once.
///
/// # Errors
///
/// Returns an error if the runner cannot be spawned or exits non-zero.
pub async fn run_playbook(
    runner: &impl CommandRunner,
    command: ComposedCommand,
    step: &'static str,
    stdio: StdioMode,
) -> Result<()> {
    tracing::debug!(command = %command, "running playbook");
    run_step(runner, &command.invocation(), step, stdio).await
}

/// Create the temporary log for one operation.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_log<S: TempLogStore>(store: &S) -> Result<S::Log> {
    let log = store.create().context("creating temporary log file")?;
    tracing::debug!(path = %log.path().display(), "writing playbook logs");
    Ok(log)
}

/// Remove the temporary log. Failure to remove it is reported, not fatal.
pub fn cleanup(log: impl TempLog, reporter: &impl ProgressReporter) {
    let path = log.path().display().to_string();
    if let Err(e) = log.remove() {
        reporter.warn(&format!("could not remove {path}: {e}"));
    }
}

async fn run_step(
    runner: &impl CommandRunner,
    invocation: &Invocation,
    step: &'static str,
    stdio: StdioMode,
) -> Result<()> {
    let status = runner
        .run_status(invocation.program, &invocation.arg_refs(), stdio)
        .await
        .map_err(|e| RunnerError::Spawn {
            step,
            source: e.into(),
        })?;
    if !status.success() {
        return Err(RunnerError::Exited {
            step,
            code: status.code(),
        }
        .into());
    }
    Ok(())
}
