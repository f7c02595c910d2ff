//! # Lasrun Toolbox Integration Tests
//!
//! File: cli/tests/lastools.rs
//!
//! Runs the toolbox subcommands against fake LAStools installations whose
//! executables are shell scripts, checking exit codes and relayed output.
//!
#![cfg(unix)]

mod common;

use common::{fake_tool, lasrun_cmd};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

const LASTHIN: [&str; 10] = [
    "in.las", "0,5", "highest", "#", "#", "#", "#", "#", "false", "false",
];

fn lasthin_with_root(root: &Path, params: &[&str]) -> assert_cmd::assert::Assert {
    let work = root.parent().unwrap();
    lasrun_cmd(work)
        .arg("--install-root")
        .arg(root)
        .arg("lasthin")
        .args(params)
        .assert()
}

#[test]
fn test_success_passes_arguments_verbatim() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "lasthin64", r#"printf 'arg:%s\n' "$@""#);

    lasthin_with_root(&root, &LASTHIN)
        .code(0)
        .stdout(predicate::str::contains("Starting lasthin64 ..."))
        .stdout(predicate::str::contains("LAStools command line:"))
        .stdout(predicate::str::contains("arg:-step\narg:0.5\narg:-highest"))
        .stdout(predicate::str::contains("Success. lasthin64 done."));
}

#[test]
fn test_warning_exit_code_is_forwarded() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "lasthin64", "echo 'WARNING: 3 points out of bounds' >&2\nexit 1");

    lasthin_with_root(&root, &LASTHIN)
        .code(1)
        .stderr(predicate::str::contains("WARNING: 3 points out of bounds"))
        .stderr(predicate::str::contains("Warnings. lasthin64 done."));
}

#[test]
fn test_error_exit_code_is_forwarded() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "lasthin64", "echo 'ERROR: cannot open in.las'\nexit 2");

    lasthin_with_root(&root, &LASTHIN)
        .code(2)
        .stderr(predicate::str::contains("ERROR: cannot open in.las"))
        .stderr(predicate::str::contains("Error. lasthin64 failed."));
}

#[test]
fn test_32_bit_error_text_overrides_exit_code() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "lasthin", "echo 'ERROR: file not found'\nexit 0");

    let mut params = LASTHIN;
    params[8] = "true";
    lasthin_with_root(&root, &params)
        .code(3)
        .stdout(predicate::str::contains("Starting lasthin ..."))
        .stderr(predicate::str::contains("Error. lasthin failed."));
}

#[test]
fn test_32_bit_warning_text() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "lasthin", "echo 'WARNING: empty output'\nexit 0");

    let mut params = LASTHIN;
    params[8] = "true";
    lasthin_with_root(&root, &params).code(1);
}

#[test]
fn test_missing_executable() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "las2iso64", "exit 0");

    lasthin_with_root(&root, &LASTHIN)
        .code(1)
        .stdout(predicate::str::contains("Cannot find lasthin64 at"))
        .stderr(predicate::str::contains("Cannot find lasthin64"));
}

#[test]
fn test_install_root_with_spaces() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("my lastools");
    fake_tool(&root, "lasthin64", "exit 0");

    lasthin_with_root(&root, &LASTHIN)
        .code(1)
        .stdout(predicate::str::contains("contains spaces"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_relative_root_under_spaced_directory() {
    let temp = tempdir().unwrap();
    let work = temp.path().join("my work");
    fake_tool(&work.join("lastools"), "lasthin64", "exit 0");

    lasrun_cmd(&work)
        .args(["--install-root", "lastools", "lasthin"])
        .args(LASTHIN)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("contains spaces"))
        .stdout(predicate::str::contains("my work"));
}

#[test]
fn test_missing_bin_is_reported() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    std::fs::create_dir_all(&root).unwrap();

    lasthin_with_root(&root, &LASTHIN)
        .code(1)
        .stdout(predicate::str::contains("Cannot find lastools/bin at"));
}

#[test]
fn test_root_derived_from_script_path() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "las3dpoly64", r#"printf 'arg:%s\n' "$@""#);
    let script = root.join("ArcGIS_toolbox").join("scripts").join("las3dpoly.py");

    let params = [
        "in.laz", "wires.shp", "2", "#", "false", "false", "true", "false", "false", "false",
        "false", "#", "#", "#", "#", "#", "#", "true", "true",
    ];
    lasrun_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("las3dpoly")
        .args(params)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("arg:-v\narg:-i\narg:in.laz"))
        .stdout(predicate::str::contains("arg:-remove_points"))
        .stdout(predicate::str::contains("Success. las3dpoly64 done."));
}

#[test]
fn test_root_from_configuration() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("lastools");
    fake_tool(&root, "las2iso64", r#"printf 'arg:%s\n' "$@""#);
    std::fs::write(
        temp.path().join("lasrun.toml"),
        format!("[lastools]\ninstall_root = \"{}\"\n", root.display()),
    )
    .unwrap();

    let params = [
        "in.las",
        "50",
        "only ground points",
        "a number of x equally spaced contours",
        "10",
        "do not smooth",
        "do not simplify",
        "do not clean",
        "#",
        "#",
        "laz",
        "#",
        "#",
        "#",
        "#",
        "false",
        "false",
    ];
    lasrun_cmd(temp.path())
        .arg("las2iso")
        .args(params)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("-i \"in.las\""))
        .stdout(predicate::str::contains("arg:-keep_class\narg:2\narg:-extra_pass\narg:-olaz"))
        .stdout(predicate::str::contains("-iso_number").not());
}
