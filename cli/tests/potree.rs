//! # Lasrun Potree Integration Tests
//!
//! File: cli/tests/potree.rs
//!
//! Drives `lasrun potree` with fake `las2las` and `PotreeConverter` scripts and a
//! settings file in a temporary directory.
//!
#![cfg(unix)]

mod common;

use common::{lasrun_cmd, write_script};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_set_then_show() {
    let temp = tempdir().unwrap();
    let settings = temp.path().join("potree.json");

    lasrun_cmd(temp.path())
        .args(["potree", "config", "set", "--potree", "/opt/PotreeConverter"])
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    lasrun_cmd(temp.path())
        .args(["potree", "config", "set", "--output-dir", "/srv/www"])
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&settings).unwrap()).unwrap();
    assert_eq!(saved["potree"], "/opt/PotreeConverter");
    assert_eq!(saved["output_dir"], "/srv/www");
    assert_eq!(saved["lastools"], "");

    lasrun_cmd(temp.path())
        .args(["potree", "config", "show"])
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("potree:     /opt/PotreeConverter"));
}

#[test]
fn test_convert_runs_both_steps() {
    let temp = tempdir().unwrap();
    let log = temp.path().join("calls.log");
    let las2las = write_script(
        &temp.path().join("tools").join("las2las64"),
        &format!(r#"echo "las2las $*" >> '{}'"#, log.display()),
    );
    let potree = write_script(
        &temp.path().join("tools").join("PotreeConverter"),
        &format!(r#"echo "potree $*" >> '{}'"#, log.display()),
    );
    let input = temp.path().join("site.laz");
    fs::write(&input, "").unwrap();
    let out = temp.path().join("www");

    lasrun_cmd(temp.path())
        .args(["potree", "convert", "--name", "site"])
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--las2las")
        .arg(&las2las)
        .arg("--potree")
        .arg(&potree)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion finished! Page:"))
        .stdout(predicate::str::contains("site.html"));

    let fixed = temp.path().join("site_fixed.las");
    let calls = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("las2las -i {} -o {}", input.display(), fixed.display()),
            format!("potree {} -o {} --generate-page site", fixed.display(), out.display()),
        ]
    );
}

#[test]
fn test_convert_uses_saved_settings_and_stops_on_failure() {
    let temp = tempdir().unwrap();
    let las2las = write_script(&temp.path().join("las2las64"), "echo 'bad header'\nexit 4");
    let potree = write_script(&temp.path().join("PotreeConverter"), "touch ran\nexit 0");
    let settings = temp.path().join("potree.json");
    fs::write(
        &settings,
        serde_json::json!({
            "lastools": las2las,
            "potree": potree,
            "output_dir": temp.path().join("www"),
        })
        .to_string(),
    )
    .unwrap();

    lasrun_cmd(temp.path())
        .args(["potree", "convert", "--input", "site.las", "--name", "site", "--capture"])
        .arg("--settings")
        .arg(&settings)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad header"))
        .stderr(predicate::str::contains("External command failed"));
    assert!(!temp.path().join("ran").exists());
}

#[test]
fn test_convert_without_executables_fails() {
    let temp = tempdir().unwrap();
    lasrun_cmd(temp.path())
        .args(["potree", "convert", "--input", "site.las", "--name", "site"])
        .arg("--settings")
        .arg(temp.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Fill in every field"));
}
