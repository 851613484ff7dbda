//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` spawns the container runtime with tokio and waits for
//! it to exit. There is no timeout: a playbook run can take a long time and
//! may sit at an interactive prompt.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, StdioMode};

/// Production `CommandRunner`.
///
/// stdin is always inherited so `sudo` and `ansible-playbook -K` can prompt.
/// stdout and stderr follow the requested [`StdioMode`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn output_stdio(mode: StdioMode) -> Stdio {
    match mode {
        StdioMode::Inherit => Stdio::inherit(),
        StdioMode::Stderr => Stdio::from(std::io::stderr()),
        StdioMode::Discard => Stdio::null(),
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        stdio: StdioMode,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(output_stdio(stdio))
            .stderr(output_stdio(stdio))
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
