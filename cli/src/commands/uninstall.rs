//! `mirror-registry uninstall` — remove Quay from the target host.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::OperationContext;
use crate::application::services::uninstall::uninstall;
use crate::domain::config::{UninstallConfig, UninstallOptions};
use crate::infra::fs::executable_dir;
use crate::infra::host::host_defaults;
use crate::output::{Renderer, TerminalReporter};

/// Arguments for the uninstall command.
#[derive(Args, Debug, Default)]
pub struct UninstallArgs {
    /// The path of your SSH identity key [default: ~/.ssh/id_rsa]
    #[arg(short = 'k', long = "ssh-key", value_name = "PATH")]
    pub ssh_key: Option<PathBuf>,

    /// The hostname of the target you wish to uninstall Quay from [default: localhost]
    #[arg(short = 'H', long = "targetHostname", value_name = "HOST")]
    pub target_hostname: Option<String>,

    /// The user you wish to SSH into your target with [default: current user]
    #[arg(short = 'u', long = "targetUsername", value_name = "USER")]
    pub target_username: Option<String>,

    /// Additional arguments appended verbatim to the ansible-playbook call [default: -K]
    #[arg(long = "additionalArgs", value_name = "ARGS", allow_hyphen_values = true)]
    pub additional_args: Option<String>,
}

impl From<UninstallArgs> for UninstallOptions {
    fn from(args: UninstallArgs) -> Self {
        Self {
            target_hostname: args.target_hostname,
            target_username: args.target_username,
            ssh_key: args.ssh_key,
            additional_args: args.additional_args,
        }
    }
}

/// Run `mirror-registry uninstall`.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved, an artifact is
/// missing, or an external step fails.
pub async fn run(app: &AppContext, args: UninstallArgs) -> Result<()> {
    let config = UninstallConfig::resolve(args.into(), &host_defaults())?;
    let exec_dir = executable_dir()?;
    let reporter = TerminalReporter::new(&app.output);
    let ctx = OperationContext {
        reporter: &reporter,
        exec_dir: &exec_dir,
        stdio: app.stdio(),
    };

    let host = uninstall(&app.runner, &app.fs, &app.fs, &ctx, config).await?;

    match app.renderer() {
        Renderer::Human(r) => r.render_uninstall(&host),
        Renderer::Json(r) => r.render_uninstall(&host)?,
    }
    Ok(())
}
