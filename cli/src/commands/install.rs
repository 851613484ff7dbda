//! `mirror-registry install` — install Quay on the target host.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::OperationContext;
use crate::application::services::install::install;
use crate::domain::config::{ImageRefs, InstallConfig, InstallOptions};
use crate::domain::password::generate_password;
use crate::infra::fs::executable_dir;
use crate::infra::host::host_defaults;
use crate::output::{Renderer, TerminalReporter};

/// Arguments for the install command.
#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// The hostname of the target you wish to install Quay to [default: localhost]
    #[arg(short = 'H', long = "targetHostname", value_name = "HOST")]
    pub target_hostname: Option<String>,

    /// The user on the target host which will be used for SSH [default: current user]
    #[arg(short = 'u', long = "targetUsername", value_name = "USER")]
    pub target_username: Option<String>,

    /// The path of your SSH identity key [default: ~/.ssh/id_rsa]
    #[arg(short = 'k', long = "ssh-key", value_name = "PATH")]
    pub ssh_key: Option<PathBuf>,

    /// The password of the initial user. Randomly generated when omitted
    #[arg(long = "initPassword", value_name = "PASSWORD")]
    pub init_password: Option<String>,

    /// The value to set SERVER_HOSTNAME in the Quay config.yaml [default: <targetHostname>:8443]
    #[arg(long = "quayHostname", value_name = "HOST[:PORT]")]
    pub quay_hostname: Option<String>,

    /// An archive containing the Quay, Redis and Postgres images
    /// [default: image-archive.tar next to this binary, if present]
    #[arg(short = 'i', long = "image-archive", value_name = "PATH")]
    pub image_archive: Option<PathBuf>,

    /// Additional arguments appended verbatim to the ansible-playbook call [default: -K]
    #[arg(long = "additionalArgs", value_name = "ARGS", allow_hyphen_values = true)]
    pub additional_args: Option<String>,
}

impl From<InstallArgs> for InstallOptions {
    fn from(args: InstallArgs) -> Self {
        Self {
            target_hostname: args.target_hostname,
            target_username: args.target_username,
            ssh_key: args.ssh_key,
            init_password: args.init_password,
            quay_hostname: args.quay_hostname,
            image_archive: args.image_archive,
            additional_args: args.additional_args,
        }
    }
}

/// Run `mirror-registry install`.
///
/// # Errors
///
/// Returns an error if configuration cannot be resolved, an artifact is
/// missing, or an external step fails.
pub async fn run(app: &AppContext, args: InstallArgs) -> Result<()> {
    let config = InstallConfig::resolve(
        args.into(),
        &host_defaults(),
        ImageRefs::bundled(),
        generate_password,
    )?;
    let exec_dir = executable_dir()?;
    let reporter = TerminalReporter::new(&app.output);
    let ctx = OperationContext {
        reporter: &reporter,
        exec_dir: &exec_dir,
        stdio: app.stdio(),
    };

    let outcome = install(&app.runner, &app.fs, &app.fs, &ctx, config).await?;

    match app.renderer() {
        Renderer::Human(r) => r.render_install(&outcome),
        Renderer::Json(r) => r.render_install(&outcome)?,
    }
    Ok(())
}
