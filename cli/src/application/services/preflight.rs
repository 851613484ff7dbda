//! Application service — local artifact checks run before any process starts.
//!
//! Checks run in a fixed order (execution environment, SSH key, image
//! archive) and the first failure aborts.

use std::path::{Path, PathBuf};

use crate::application::ports::PathProbe;
use crate::domain::config::{
    ExecutionContext, InstallConfig, Target, UninstallConfig, default_image_archive_path,
    execution_environment_path,
};
use crate::domain::error::PreflightError;

/// Verify the artifacts the install needs and resolve the image archive.
///
/// # Errors
///
/// Returns the first missing artifact.
pub fn check_install(
    probe: &impl PathProbe,
    exec_dir: &Path,
    config: &InstallConfig,
) -> Result<ExecutionContext, PreflightError> {
    let execution_environment = check_common(probe, exec_dir, &config.target)?;
    let image_archive = resolve_image_archive(probe, exec_dir, config.image_archive.as_deref())?;
    Ok(ExecutionContext {
        execution_environment,
        image_archive,
    })
}

/// Verify the artifacts the uninstall needs.
///
/// # Errors
///
/// Returns the first missing artifact.
pub fn check_uninstall(
    probe: &impl PathProbe,
    exec_dir: &Path,
    config: &UninstallConfig,
) -> Result<ExecutionContext, PreflightError> {
    Ok(ExecutionContext {
        execution_environment: check_common(probe, exec_dir, &config.target)?,
        image_archive: None,
    })
}

fn check_common(
    probe: &impl PathProbe,
    exec_dir: &Path,
    target: &Target,
) -> Result<PathBuf, PreflightError> {
    let ee = execution_environment_path(exec_dir);
    if !probe.exists(&ee) {
        return Err(PreflightError::ExecutionEnvironmentNotFound(ee));
    }
    tracing::info!(path = %ee.display(), "found execution environment");

    if !probe.exists(&target.ssh_key) {
        return Err(PreflightError::SshKeyNotFound(target.ssh_key.clone()));
    }
    tracing::info!(path = %target.ssh_key.display(), "found SSH key");
    Ok(ee)
}

/// An explicit archive must exist; the default one is optional.
fn resolve_image_archive(
    probe: &impl PathProbe,
    exec_dir: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, PreflightError> {
    if let Some(path) = explicit {
        if !probe.exists(path) {
            return Err(PreflightError::ImageArchiveNotFound(path.to_path_buf()));
        }
        tracing::info!(path = %path.display(), "found image archive");
        return Ok(Some(path.to_path_buf()));
    }

    let default = default_image_archive_path(exec_dir);
    if probe.exists(&default) {
        tracing::info!(path = %default.display(), "found image archive");
        Ok(Some(default))
    } else {
        tracing::debug!(path = %default.display(), "no image archive, images will be pulled");
        Ok(None)
    }
}
