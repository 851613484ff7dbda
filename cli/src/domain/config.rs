//! Install and uninstall configuration: defaults and resolution.
//!
//! Pure functions only — no I/O, no async, no filesystem access. Facts about
//! the invoking host (user name, home directory) arrive as [`HostDefaults`].

use std::path::{Path, PathBuf};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_TARGET_HOSTNAME: &str = "localhost";
pub const DEFAULT_QUAY_PORT: u16 = 8443;
pub const DEFAULT_ADDITIONAL_ARGS: &str = "-K";
/// Username of the initial Quay account created by the install playbook.
pub const INIT_USERNAME: &str = "init";

// ── Host facts ───────────────────────────────────────────────────────────────

/// Facts about the invoking host used to fill in unset options.
#[derive(Debug, Clone, Default)]
pub struct HostDefaults {
    /// Name of the invoking user.
    pub username: Option<String>,
    /// Home directory of the invoking user.
    pub home_dir: Option<PathBuf>,
}

impl HostDefaults {
    /// `<home>/.ssh/id_rsa`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownHome`] when no home directory is known.
    pub fn ssh_key(&self) -> Result<PathBuf, ConfigError> {
        self.home_dir
            .as_deref()
            .map(|home| home.join(".ssh").join("id_rsa"))
            .ok_or(ConfigError::UnknownHome)
    }
}

// ── Image references ─────────────────────────────────────────────────────────

/// Container images the install playbook deploys on the target host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRefs {
    pub quay: String,
    pub redis: String,
    pub postgres: String,
}

impl ImageRefs {
    /// Image references pinned into this binary at build time.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            quay: env!("QUAY_IMAGE").to_string(),
            redis: env!("REDIS_IMAGE").to_string(),
            postgres: env!("POSTGRES_IMAGE").to_string(),
        }
    }
}

// ── Target ───────────────────────────────────────────────────────────────────

/// The remote host the playbook connects to over SSH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub hostname: String,
    pub username: String,
    pub ssh_key: PathBuf,
}

impl Target {
    fn resolve(
        hostname: Option<String>,
        username: Option<String>,
        ssh_key: Option<PathBuf>,
        host: &HostDefaults,
    ) -> Result<Self, ConfigError> {
        let username = match username {
            Some(u) => u,
            None => host.username.clone().ok_or(ConfigError::UnknownUser)?,
        };
        let ssh_key = match ssh_key {
            Some(k) => k,
            None => host.ssh_key()?,
        };
        Ok(Self {
            hostname: hostname.unwrap_or_else(|| DEFAULT_TARGET_HOSTNAME.to_string()),
            username,
            ssh_key,
        })
    }
}

/// Returns the part of `hostname` before the first `:`.
#[must_use]
pub fn strip_port(hostname: &str) -> &str {
    hostname.split_once(':').map_or(hostname, |(host, _)| host)
}

/// `<targetHostname>:8443`.
#[must_use]
pub fn default_quay_hostname(target_hostname: &str) -> String {
    format!("{target_hostname}:{DEFAULT_QUAY_PORT}")
}

// ── Install ──────────────────────────────────────────────────────────────────

/// User-supplied install options, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub target_hostname: Option<String>,
    pub target_username: Option<String>,
    pub ssh_key: Option<PathBuf>,
    pub init_password: Option<String>,
    pub quay_hostname: Option<String>,
    pub image_archive: Option<PathBuf>,
    pub additional_args: Option<String>,
}

/// Fully resolved install configuration. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub target: Target,
    pub init_password: String,
    /// Never empty once resolved.
    pub quay_hostname: String,
    pub images: ImageRefs,
    /// Explicit `--image-archive`; the default location is probed later.
    pub image_archive: Option<PathBuf>,
    /// Appended verbatim to the `ansible-playbook` call. Not validated.
    pub additional_args: String,
}

impl InstallConfig {
    /// Apply defaults to `opts`.
    ///
    /// `generate_password` is only called when no password was supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or home directory is needed but unknown,
    /// or if password generation fails.
    pub fn resolve(
        opts: InstallOptions,
        host: &HostDefaults,
        images: ImageRefs,
        generate_password: impl FnOnce() -> Result<String, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let target = Target::resolve(opts.target_hostname, opts.target_username, opts.ssh_key, host)?;
        let init_password = match non_empty(opts.init_password) {
            Some(p) => p,
            None => generate_password()?,
        };
        let quay_hostname = non_empty(opts.quay_hostname)
            .unwrap_or_else(|| default_quay_hostname(&target.hostname));
        Ok(Self {
            target,
            init_password,
            quay_hostname,
            images,
            image_archive: opts.image_archive.filter(|p| !p.as_os_str().is_empty()),
            additional_args: opts
                .additional_args
                .unwrap_or_else(|| DEFAULT_ADDITIONAL_ARGS.to_string()),
        })
    }

    /// URL the installed registry is reachable at.
    #[must_use]
    pub fn access_url(&self) -> String {
        format!("https://{}", self.quay_hostname)
    }
}

// ── Uninstall ────────────────────────────────────────────────────────────────

/// User-supplied uninstall options, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    pub target_hostname: Option<String>,
    pub target_username: Option<String>,
    pub ssh_key: Option<PathBuf>,
    pub additional_args: Option<String>,
}

/// Fully resolved uninstall configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallConfig {
    pub target: Target,
    pub additional_args: String,
}

impl UninstallConfig {
    /// Apply defaults to `opts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user or home directory is needed but unknown.
    pub fn resolve(opts: UninstallOptions, host: &HostDefaults) -> Result<Self, ConfigError> {
        Ok(Self {
            target: Target::resolve(opts.target_hostname, opts.target_username, opts.ssh_key, host)?,
            additional_args: opts
                .additional_args
                .unwrap_or_else(|| DEFAULT_ADDITIONAL_ARGS.to_string()),
        })
    }

    /// Hostname used in the inventory, with any `:port` suffix removed.
    #[must_use]
    pub fn inventory_host(&self) -> &str {
        strip_port(&self.target.hostname)
    }
}

// ── Artifacts ────────────────────────────────────────────────────────────────

pub const EXECUTION_ENVIRONMENT_ARCHIVE: &str = "execution-environment.tar";
pub const IMAGE_ARCHIVE: &str = "image-archive.tar";

/// Local archives verified to exist before any external process runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub execution_environment: PathBuf,
    /// Mounted into the runner container only when present.
    pub image_archive: Option<PathBuf>,
}

/// `<exec_dir>/execution-environment.tar`.
#[must_use]
pub fn execution_environment_path(exec_dir: &Path) -> PathBuf {
    exec_dir.join(EXECUTION_ENVIRONMENT_ARCHIVE)
}

/// `<exec_dir>/image-archive.tar`.
#[must_use]
pub fn default_image_archive_path(exec_dir: &Path) -> PathBuf {
    exec_dir.join(IMAGE_ARCHIVE)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
