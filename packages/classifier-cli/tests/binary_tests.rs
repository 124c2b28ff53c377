use std::process::Command;

use tempfile::TempDir;

fn style_classify(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_style-classify"));
    cmd.current_dir(dir.path())
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("ENABLE_FILE_LOGS");
    cmd
}

#[test]
fn failure_is_reported_once_with_exit_code() {
    let dir = TempDir::new().unwrap();
    let output = style_classify(&dir)
        .args(["classify", "absent.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(74));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("io error on").count(), 1, "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn styles_lists_every_key_on_stdout() {
    let dir = TempDir::new().unwrap();
    let output = style_classify(&dir).arg("styles").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("visual-fast-conceptual"));
}
