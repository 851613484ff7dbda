//! Tests for the `uninstall` application service.

#![allow(clippy::expect_used)]

use mirror_registry::application::ports::StdioMode;
use mirror_registry::application::services::uninstall::uninstall;
use mirror_registry::domain::error::PreflightError;

use crate::helpers::{
    EE_ARCHIVE, FakeFs, FakeLogs, RecordingReporter, RecordingRunner, SSH_KEY, operation,
    uninstall_config,
};

#[tokio::test]
async fn uninstall_strips_port_from_inventory_target() {
    let runner = RecordingRunner::new();
    let fs = FakeFs::with(&[EE_ARCHIVE, SSH_KEY]);
    let logs = FakeLogs::default();
    let reporter = RecordingReporter::default();
    let ctx = operation(&reporter, StdioMode::Discard);

    let host = uninstall(&runner, &fs, &logs, &ctx, uninstall_config("mirror.example.com:8443"))
        .await
        .expect("uninstall");

    assert_eq!(host, "mirror.example.com");
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].args, ["podman", "load", "-i", EE_ARCHIVE]);
    assert_eq!(
        calls[1].args[1],
        "sudo podman run --rm --interactive --tty --workdir /runner/project --net host \
         -v /home/quay/.ssh/id_rsa:/runner/env/ssh_key \
         -e RUNNER_OMIT_EVENTS=False -e RUNNER_ONLY_FAILED_EVENTS=False \
         -e ANSIBLE_HOST_KEY_CHECKING=False -e ANSIBLE_CONFIG=/runner/project/ansible.cfg \
         --quiet --name ansible_runner_instance quay.io/quay/openshift-mirror-registry-ee \
         ansible-playbook -i quay@mirror.example.com, --private-key /runner/env/ssh_key \
         uninstall_mirror_appliance.yml -K"
    );
    assert_eq!(logs.removed(), 1);
    assert!(
        reporter
            .messages
            .lock()
            .expect("lock")
            .contains(&"success: Quay uninstalled successfully".to_string())
    );
}

#[tokio::test]
async fn uninstall_without_execution_environment_runs_nothing() {
    let runner = RecordingRunner::new();
    let fs = FakeFs::with(&[SSH_KEY]);
    let reporter = RecordingReporter::default();
    let ctx = operation(&reporter, StdioMode::Discard);

    let err = uninstall(&runner, &fs, &FakeLogs::default(), &ctx, uninstall_config("h"))
        .await
        .expect_err("ee missing");

    assert!(matches!(
        err.downcast_ref::<PreflightError>(),
        Some(PreflightError::ExecutionEnvironmentNotFound(_))
    ));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn uninstall_playbook_failure_is_fatal() {
    let runner = RecordingRunner::with_exit_codes(&[0, 4]);
    let fs = FakeFs::with(&[EE_ARCHIVE, SSH_KEY]);
    let reporter = RecordingReporter::default();
    let ctx = operation(&reporter, StdioMode::Discard);

    let err = uninstall(&runner, &fs, &FakeLogs::default(), &ctx, uninstall_config("h"))
        .await
        .expect_err("playbook fails");

    assert_eq!(err.to_string(), "uninstall playbook failed (exit status 4)");
}
