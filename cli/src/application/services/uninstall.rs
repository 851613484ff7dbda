//! Application service — uninstall use-case.

use anyhow::Result;

use crate::application::ports::{CommandRunner, PathProbe, ProgressReporter, TempLogStore};
use crate::application::services::OperationContext;
use crate::application::services::execution::{cleanup, load_environment, open_log, run_playbook};
use crate::application::services::preflight::check_uninstall;
use crate::domain::command::compose_uninstall;
use crate::domain::config::UninstallConfig;

/// Remove the mirror registry from the configured target.
///
/// Returns the host the uninstall playbook ran against.
///
/// # Errors
///
/// Returns an error if an artifact is missing or an external process fails.
pub async fn uninstall(
    runner: &impl CommandRunner,
    probe: &impl PathProbe,
    logs: &impl TempLogStore,
    ctx: &OperationContext<'_, impl ProgressReporter>,
    config: UninstallConfig,
) -> Result<String> {
    let reporter = ctx.reporter;
    reporter.step("uninstall has begun");

    let exec = check_uninstall(probe, ctx.exec_dir, &config)?;
    load_environment(runner, reporter, &exec, ctx.stdio).await?;

    let log = open_log(logs)?;
    reporter.step(
        "running uninstall playbook. This may take some time. \
         To see playbook output run the installer with -v (verbose) flag.",
    );
    run_playbook(runner, compose_uninstall(&config), "uninstall playbook", ctx.stdio).await?;
    cleanup(log, reporter);

    reporter.success("Quay uninstalled successfully");
    Ok(config.inventory_host().to_string())
}
