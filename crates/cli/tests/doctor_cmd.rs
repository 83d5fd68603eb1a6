use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_reports_config_and_journal() {
    let tmp = tempdir().unwrap();
    let journal = tmp.path().join("j");
    fs::create_dir_all(journal.join("2020/01")).unwrap();
    fs::write(journal.join("2020/01/2020-01-02.md"), "x").unwrap();
    fs::write(journal.join("2020/01/2020-01-05.md"), "y").unwrap();

    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\njournal_root = \"{}\"\n", journal.display()),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("chron"));
    cmd.env("NO_COLOR", "1");
    cmd.arg("--config").arg(&cfg).arg("doctor");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   chron doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("excluded_dirs: attachments"))
        .stdout(predicate::str::contains("entries: 2"))
        .stdout(predicate::str::contains("newest: 2020-01-05"))
        .stdout(predicate::str::contains("oldest: 2020-01-02"));
}

#[test]
fn doctor_fails_on_missing_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("nope.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("chron"));
    cmd.arg("--config").arg(&cfg).arg("doctor");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL chron doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_missing_journal() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[profiles.default]\njournal_root = \"{}\"\n",
            tmp.path().join("gone").display()
        ),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("chron"));
    cmd.arg("--config").arg(&cfg).arg("doctor");

    cmd.assert().failure().stdout(predicate::str::contains("FAIL journal"));
}
