//! Shared test helpers: recording port implementations and fixtures.

#![allow(dead_code, clippy::expect_used)]

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use mirror_registry::application::ports::{
    CommandRunner, PathProbe, ProgressReporter, StdioMode, TempLog, TempLogStore,
};
use mirror_registry::application::services::OperationContext;
use mirror_registry::domain::config::{ImageRefs, InstallConfig, Target, UninstallConfig};

pub const EXEC_DIR: &str = "/opt/mirror-registry";
pub const EE_ARCHIVE: &str = "/opt/mirror-registry/execution-environment.tar";
pub const DEFAULT_IMAGE_ARCHIVE: &str = "/opt/mirror-registry/image-archive.tar";
pub const SSH_KEY: &str = "/home/quay/.ssh/id_rsa";

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── CommandRunner ────────────────────────────────────────────────────────────

/// One recorded `run_status` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub stdio: StdioMode,
}

/// Records every call and answers with scripted exit codes (0 once exhausted).
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Mutex<Vec<Call>>,
    exit_codes: Mutex<VecDeque<i32>>,
    spawn_error: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer successive calls with `codes`.
    pub fn with_exit_codes(codes: &[i32]) -> Self {
        Self {
            exit_codes: Mutex::new(codes.iter().copied().collect()),
            ..Self::default()
        }
    }

    /// Fail every call as if the program could not be spawned.
    pub fn failing_spawn() -> Self {
        Self {
            spawn_error: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        stdio: StdioMode,
    ) -> Result<ExitStatus> {
        self.calls.lock().expect("lock").push(Call {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            stdio,
        });
        if self.spawn_error {
            anyhow::bail!("failed to spawn {program}");
        }
        let code = self.exit_codes.lock().expect("lock").pop_front().unwrap_or(0);
        Ok(exit_status(code))
    }
}

// ── PathProbe ────────────────────────────────────────────────────────────────

/// In-memory filesystem that records the order of existence checks.
#[derive(Default)]
pub struct FakeFs {
    existing: HashSet<PathBuf>,
    pub probed: Mutex<Vec<PathBuf>>,
}

impl FakeFs {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            existing: paths.iter().map(PathBuf::from).collect(),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.lock().expect("lock").clone()
    }
}

impl PathProbe for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.probed.lock().expect("lock").push(path.to_path_buf());
        self.existing.contains(path)
    }
}

// ── TempLogStore ─────────────────────────────────────────────────────────────

/// Counts created and explicitly removed logs.
#[derive(Default)]
pub struct FakeLogs {
    pub created: AtomicUsize,
    pub removed: Arc<AtomicUsize>,
}

pub struct FakeLog {
    path: PathBuf,
    removed: Arc<AtomicUsize>,
}

impl TempLogStore for FakeLogs {
    type Log = FakeLog;

    fn create(&self) -> Result<FakeLog> {
        let n = self.created.fetch_add(1, Ordering::SeqCst);
        Ok(FakeLog {
            path: PathBuf::from(format!("/tmp/ansible-output{n}")),
            removed: Arc::clone(&self.removed),
        })
    }
}

impl TempLog for FakeLog {
    fn path(&self) -> &Path {
        &self.path
    }

    fn remove(self) -> Result<()> {
        self.removed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl FakeLogs {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn removed(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

// ── ProgressReporter ─────────────────────────────────────────────────────────

/// Collects every message instead of printing.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.messages.lock().expect("lock").push(format!("warn: {message}"));
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn operation(
    reporter: &RecordingReporter,
    stdio: StdioMode,
) -> OperationContext<'_, RecordingReporter> {
    OperationContext {
        reporter,
        exec_dir: Path::new(EXEC_DIR),
        stdio,
    }
}

pub fn target(hostname: &str) -> Target {
    Target {
        hostname: hostname.to_string(),
        username: "quay".to_string(),
        ssh_key: PathBuf::from(SSH_KEY),
    }
}

pub fn install_config() -> InstallConfig {
    InstallConfig {
        target: target("registry.example.com"),
        init_password: "s3cret".to_string(),
        quay_hostname: "registry.example.com:8443".to_string(),
        images: ImageRefs {
            quay: "quay.io/projectquay/quay:3.6".to_string(),
            redis: "docker.io/library/redis:6.2".to_string(),
            postgres: "docker.io/library/postgres:10".to_string(),
        },
        image_archive: None,
        additional_args: "-K".to_string(),
    }
}

pub fn uninstall_config(hostname: &str) -> UninstallConfig {
    UninstallConfig {
        target: target(hostname),
        additional_args: "-K".to_string(),
    }
}
