mod common;

use assert_cmd::Command;
use common::{create_corrupt_logo, create_logo, create_project, list_names};
use predicates::prelude::*;
use tempfile::TempDir;

fn logo_squeeze() -> Command {
    Command::cargo_bin("logo-squeeze").unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = logo_squeeze();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--move-originals"));
}

#[test]
fn test_invalid_format() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = logo_squeeze();
    cmd.args(["--root", &temp_dir.path().to_string_lossy(), "--format", "gif"]);
    cmd.assert().failure();
}

#[test]
fn test_invalid_quality() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = logo_squeeze();
    cmd.args(["--root", &temp_dir.path().to_string_lossy(), "--jpeg-quality", "0"]);
    cmd.assert().failure();
}

#[test]
fn test_empty_archive_reports_error() {
    let project = create_project();

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No *-logo.png files found"));

    assert!(list_names(&project.optimized).is_empty());
}

#[test]
fn test_missing_directories_are_created() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &temp_dir.path().to_string_lossy()]);
    cmd.assert().success();

    assert!(temp_dir.path().join("assets/originals").is_dir());
    assert!(temp_dir.path().join("public/question-sets").is_dir());
}

#[test]
fn test_move_originals_then_optimize() {
    let project = create_project();
    create_logo(&project.optimized, "docker-logo.png", 300, 200);
    create_logo(&project.optimized, "rust-logo.png", 200, 300);

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy(), "--move-originals"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 file(s) as originals"))
        .stdout(predicate::str::contains("Run again without --move-originals"));

    assert_eq!(
        list_names(&project.originals),
        vec!["docker-logo.png", "rust-logo.png"]
    );
    assert!(list_names(&project.optimized).is_empty());

    // Nothing left to move, so the same flag falls through to optimizing
    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy(), "--move-originals"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved 0 file(s) as originals"))
        .stdout(predicate::str::contains("Optimization complete"));

    assert_eq!(
        list_names(&project.optimized),
        vec!["docker-logo.png", "rust-logo.png"]
    );
}

#[test]
fn test_png_with_webp_yields_two_outputs() {
    let project = create_project();
    create_logo(&project.originals, "go-logo.png", 320, 320);
    create_logo(&project.originals, "k8s-logo.png", 512, 256);

    let mut cmd = logo_squeeze();
    cmd.args([
        "--root",
        &project.root().to_string_lossy(),
        "--format",
        "PNG",
        "--webp",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Optimization Summary"))
        .stdout(predicate::str::contains("Web: go-logo.png"))
        .stdout(predicate::str::contains("WebP: go-logo.webp"));

    assert_eq!(
        list_names(&project.optimized),
        vec!["go-logo.png", "go-logo.webp", "k8s-logo.png", "k8s-logo.webp"]
    );
}

#[test]
fn test_webp_format_with_webp_flag_yields_one_output() {
    let project = create_project();
    create_logo(&project.originals, "go-logo.png", 320, 320);

    let mut cmd = logo_squeeze();
    cmd.args([
        "--root",
        &project.root().to_string_lossy(),
        "--format",
        "WEBP",
        "--webp",
    ]);
    cmd.assert().success();

    assert_eq!(list_names(&project.optimized), vec!["go-logo.webp"]);
}

#[test]
fn test_jpeg_format_uses_jpg_extension() {
    let project = create_project();
    create_logo(&project.originals, "java-logo.png", 300, 300);

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy(), "--format", "JPEG"]);
    cmd.assert().success();

    let output = project.optimized.join("java-logo.jpg");
    assert_eq!(image::image_dimensions(&output).unwrap(), (256, 256));
}

#[test]
fn test_custom_size() {
    let project = create_project();
    create_logo(&project.originals, "c-logo.png", 300, 100);

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy(), "--size", "64"]);
    cmd.assert().success();

    let output = project.optimized.join("c-logo.png");
    assert_eq!(image::image_dimensions(&output).unwrap(), (64, 64));
}

#[test]
fn test_corrupt_original_does_not_abort_batch() {
    let project = create_project();
    create_corrupt_logo(&project.originals, "broken-logo.png");
    create_logo(&project.originals, "fine-logo.png", 256, 256);

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("❌"))
        .stdout(predicate::str::contains("broken-logo.png"))
        .stdout(predicate::str::contains("Failed outputs: 1"));

    assert_eq!(list_names(&project.optimized), vec!["fine-logo.png"]);
}

#[test]
fn test_quiet_still_prints_errors() {
    let project = create_project();

    let mut cmd = logo_squeeze();
    cmd.args(["--root", &project.root().to_string_lossy(), "--quiet"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No *-logo.png files found"))
        .stdout(predicate::str::contains("Originals:").not());
}
