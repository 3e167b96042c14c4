use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_blockwave(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_blockwave"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("blockwave command should run")
}

#[test]
fn check_accepts_a_valid_scene() {
    let dir = tempdir().expect("tempdir should create");
    let scene_path = dir.path().join("scene.yaml");
    fs::write(
        &scene_path,
        r#"
seed: 7
grid:
  row_length: 12
animation:
  max_delay: 0.5
  time_factor: 0.8
"#,
    )
    .expect("scene should write");

    let output = run_blockwave(dir.path(), &["check", "scene.yaml"]);
    assert!(output.status.success(), "check should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK: scene.yaml"));
    assert!(stdout.contains("144 cells"));
    assert!(stdout.contains("max_delay 0.5"));
}

#[test]
fn check_rejects_out_of_range_max_delay() {
    let dir = tempdir().expect("tempdir should create");
    fs::write(
        dir.path().join("scene.yaml"),
        "animation:\n  max_delay: 1.0\n",
    )
    .expect("scene should write");

    let output = run_blockwave(dir.path(), &["check", "scene.yaml"]);
    assert!(!output.status.success(), "check should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_delay"));
}

#[test]
fn check_rejects_missing_scene_file() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_blockwave(dir.path(), &["check", "missing.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.yaml"));
}

#[test]
fn check_rejects_malformed_yaml_with_location() {
    let dir = tempdir().expect("tempdir should create");
    fs::write(dir.path().join("scene.yaml"), "grid: [oops\n").expect("scene should write");

    let output = run_blockwave(dir.path(), &["check", "scene.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse yaml"));
}

#[test]
fn render_rejects_zero_frames_before_touching_the_gpu() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_blockwave(dir.path(), &["render", "-o", "out", "--frames", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--frames"));
}
