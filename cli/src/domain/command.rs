//! Container invocations for loading the execution environment and running
//! the install and uninstall playbooks.
//!
//! Composition is pure: the same configuration always renders to the same
//! command line. Nothing here touches the filesystem or spawns processes.

use std::fmt;
use std::path::Path;

use crate::domain::config::{ExecutionContext, InstallConfig, Target, UninstallConfig};

// ── Constants ────────────────────────────────────────────────────────────────

pub const PRIVILEGE_WRAPPER: &str = "sudo";
pub const CONTAINER_RUNTIME: &str = "podman";
pub const SHELL: &str = "bash";
pub const EXECUTION_ENVIRONMENT_IMAGE: &str = "quay.io/quay/openshift-mirror-registry-ee";
pub const RUNNER_INSTANCE_NAME: &str = "ansible_runner_instance";
pub const RUNNER_WORKDIR: &str = "/runner/project";
pub const SSH_KEY_MOUNT: &str = "/runner/env/ssh_key";
pub const IMAGE_ARCHIVE_MOUNT: &str = "/runner/image-archive.tar";
pub const INSTALL_PLAYBOOK: &str = "install_mirror_appliance.yml";
pub const UNINSTALL_PLAYBOOK: &str = "uninstall_mirror_appliance.yml";

const RUNNER_ENV: &[(&str, &str)] = &[
    ("RUNNER_OMIT_EVENTS", "False"),
    ("RUNNER_ONLY_FAILED_EVENTS", "False"),
    ("ANSIBLE_HOST_KEY_CHECKING", "False"),
    ("ANSIBLE_CONFIG", "/runner/project/ansible.cfg"),
];

// ── Invocation ───────────────────────────────────────────────────────────────

/// A program and its argument vector, ready to hand to a `CommandRunner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl Invocation {
    /// Borrowed view of `args` in the shape `CommandRunner` expects.
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// `sudo podman load -i <archive>`.
#[must_use]
pub fn load_invocation(archive: &Path) -> Invocation {
    Invocation {
        program: PRIVILEGE_WRAPPER,
        args: vec![
            CONTAINER_RUNTIME.to_string(),
            "load".to_string(),
            "-i".to_string(),
            archive.display().to_string(),
        ],
    }
}

// ── Composed run command ─────────────────────────────────────────────────────

/// Host path bound into the runner container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    pub host: String,
    pub container: &'static str,
}

/// The complete `podman run` invocation of one playbook.
///
/// The passthrough arguments are appended unchecked and keep shell
/// word-splitting semantics, which is why this renders to a single shell
/// string executed through `bash -c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedCommand {
    mounts: Vec<Mount>,
    env: Vec<(&'static str, &'static str)>,
    inventory: String,
    extra_vars: Option<String>,
    playbook: &'static str,
    passthrough: String,
}

impl ComposedCommand {
    fn new(target: &Target, inventory_host: &str, playbook: &'static str) -> Self {
        Self {
            mounts: vec![Mount {
                host: target.ssh_key.display().to_string(),
                container: SSH_KEY_MOUNT,
            }],
            env: RUNNER_ENV.to_vec(),
            inventory: format!("{}@{inventory_host},", target.username),
            extra_vars: None,
            playbook,
            passthrough: String::new(),
        }
    }

    #[must_use]
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    #[must_use]
    pub fn inventory(&self) -> &str {
        &self.inventory
    }

    /// Render the full shell command line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut words: Vec<String> = [
            PRIVILEGE_WRAPPER,
            CONTAINER_RUNTIME,
            "run",
            "--rm",
            "--interactive",
            "--tty",
            "--workdir",
            RUNNER_WORKDIR,
            "--net",
            "host",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        for mount in &self.mounts {
            words.push("-v".to_string());
            words.push(shell_word(&format!("{}:{}", mount.host, mount.container)));
        }
        for (key, value) in &self.env {
            words.push("-e".to_string());
            words.push(format!("{key}={value}"));
        }
        words.extend(
            [
                "--quiet",
                "--name",
                RUNNER_INSTANCE_NAME,
                EXECUTION_ENVIRONMENT_IMAGE,
                "ansible-playbook",
                "-i",
            ]
            .iter()
            .map(ToString::to_string),
        );
        words.push(shell_word(&self.inventory));
        words.push("--private-key".to_string());
        words.push(SSH_KEY_MOUNT.to_string());
        if let Some(vars) = &self.extra_vars {
            words.push("-e".to_string());
            words.push(double_quoted(vars));
        }
        words.push(self.playbook.to_string());
        if !self.passthrough.is_empty() {
            words.push(self.passthrough.clone());
        }
        words.join(" ")
    }

    /// `bash -c <rendered command>`.
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: SHELL,
            args: vec!["-c".to_string(), self.render()],
        }
    }
}

impl fmt::Display for ComposedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Compose the install playbook run.
#[must_use]
pub fn compose_install(config: &InstallConfig, ctx: &ExecutionContext) -> ComposedCommand {
    let mut cmd = ComposedCommand::new(&config.target, &config.target.hostname, INSTALL_PLAYBOOK);
    if let Some(archive) = &ctx.image_archive {
        cmd.mounts.insert(
            0,
            Mount {
                host: archive.display().to_string(),
                container: IMAGE_ARCHIVE_MOUNT,
            },
        );
    }
    cmd.extra_vars = Some(format!(
        "init_password={} quay_image={} redis_image={} postgres_image={} quay_hostname={}",
        config.init_password,
        config.images.quay,
        config.images.redis,
        config.images.postgres,
        config.quay_hostname,
    ));
    cmd.passthrough.clone_from(&config.additional_args);
    cmd
}

/// Compose the uninstall playbook run. The inventory host has its port removed.
#[must_use]
pub fn compose_uninstall(config: &UninstallConfig) -> ComposedCommand {
    let mut cmd =
        ComposedCommand::new(&config.target, config.inventory_host(), UNINSTALL_PLAYBOOK);
    cmd.passthrough.clone_from(&config.additional_args);
    cmd
}

// ── Quoting ──────────────────────────────────────────────────────────────────

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c)
}

/// Single-quote `word` unless every character is safe unquoted.
fn shell_word(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Wrap in double quotes, escaping the characters bash still expands there.
fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
