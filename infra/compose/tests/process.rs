#![cfg(unix)]

use fweb_compose::{ComposeError, DockerCompose};
use tempfile::tempdir;

#[test]
fn successful_command_is_ok() {
    let dir = tempdir().unwrap();
    let compose = DockerCompose::new(dir.path()).with_program("true");

    compose.up().expect("`true` always succeeds");
    compose.exec("nginx", &["nginx", "-t"]).expect("exec maps to the same program");
}

#[test]
fn non_zero_exit_is_command_failed() {
    let dir = tempdir().unwrap();
    let compose = DockerCompose::new(dir.path()).with_program("false");

    let err = compose.run_service("certbot", Some("certbot"), &["certonly"]).unwrap_err();
    match err {
        ComposeError::CommandFailed { message, .. } => {
            assert!(message.contains("run --rm --entrypoint certbot certbot certonly"), "{message}");
        },
        other => panic!("expected CommandFailed, got {other}"),
    }
}

#[test]
fn unknown_program_is_spawn_error() {
    let dir = tempdir().unwrap();
    let compose = DockerCompose::new(dir.path()).with_program("fweb-no-such-binary");

    let err = compose.up().unwrap_err();
    assert!(matches!(err, ComposeError::Spawn { .. }), "got: {err}");
    assert!(err.to_string().contains("fweb-no-such-binary"));
}
