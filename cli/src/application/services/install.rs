//! Application service — install use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{CommandRunner, PathProbe, ProgressReporter, TempLogStore};
use crate::application::services::OperationContext;
use crate::application::services::execution::{cleanup, load_environment, open_log, run_playbook};
use crate::application::services::preflight::check_install;
use crate::domain::command::compose_install;
use crate::domain::config::{INIT_USERNAME, InstallConfig};

/// What a successful install reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub url: String,
    pub username: &'static str,
    pub password: String,
}

/// Install the mirror registry on the configured target.
///
/// Sequence: preflight checks, execution-environment load, playbook run,
/// log cleanup. Each step must succeed before the next begins.
///
/// # Errors
///
/// Returns an error if an artifact is missing or an external process fails.
pub async fn install(
    runner: &impl CommandRunner,
    probe: &impl PathProbe,
    logs: &impl TempLogStore,
    ctx: &OperationContext<'_, impl ProgressReporter>,
    config: InstallConfig,
) -> Result<InstallOutcome> {
    let reporter = ctx.reporter;
    reporter.step("install has begun");
    tracing::debug!(
        quay = %config.images.quay,
        redis = %config.images.redis,
        postgres = %config.images.postgres,
        "image references"
    );

    let exec = check_install(probe, ctx.exec_dir, &config)?;
    if exec.image_archive.is_none() {
        reporter.step("no image archive found, images will be pulled on the target");
    }

    load_environment(runner, reporter, &exec, ctx.stdio).await?;

    let log = open_log(logs)?;
    reporter.step(
        "running install playbook. This may take some time. \
         To see playbook output run the installer with -v (verbose) flag.",
    );
    run_playbook(runner, compose_install(&config, &exec), "install playbook", ctx.stdio).await?;
    cleanup(log, reporter);

    reporter.success("Quay installed successfully");
    Ok(InstallOutcome {
        url: config.access_url(),
        username: INIT_USERNAME,
        password: config.init_password,
    })
}
