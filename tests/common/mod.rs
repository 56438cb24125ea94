//! Shared test helpers for cable-joiner integration tests.
//!
//! Every run happens in its own temp directory with logging pointed at a
//! file inside it, so nothing leaks into the real working directory.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A fresh working directory for one test.
pub fn workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

fn command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cable-joiner"));
    cmd.args(args)
        .current_dir(dir)
        .env("CABLE_JOINER_LOG", dir.join("test.log"))
        .env_remove("CABLE_JOINER_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Run cable-joiner with `args` and no stdin.
pub fn joiner_in(dir: &Path, args: &[&str]) -> Output {
    command(dir, args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute cable-joiner")
}

/// Run cable-joiner feeding `stdin` to it.
pub fn joiner_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn cable-joiner");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for cable-joiner")
}

/// Run cable-joiner and assert it succeeds. Returns stdout as string.
pub fn joiner_ok(dir: &Path, args: &[&str]) -> String {
    let out = joiner_in(dir, args);
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        out.status.success(),
        "cable-joiner {} failed:\nstdout: {stdout}\nstderr: {stderr}",
        args.join(" ")
    );
    stdout.into_owned()
}

/// Run cable-joiner and assert it fails. Returns stderr as string.
pub fn joiner_err(dir: &Path, args: &[&str]) -> String {
    let out = joiner_in(dir, args);
    assert!(
        !out.status.success(),
        "cable-joiner {} unexpectedly succeeded:\nstdout: {}",
        args.join(" "),
        String::from_utf8_lossy(&out.stdout)
    );
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Contents of the log file written during the test (empty if none).
pub fn log_contents(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("test.log")).unwrap_or_default()
}
