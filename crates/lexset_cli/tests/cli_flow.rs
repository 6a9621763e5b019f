use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lexset_cli"))
}

#[test]
fn check_and_size() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("words.txt");
    fs::write(&dict, "apple\nBanana\ncherry\napple\n").expect("write dict");
    let dict = dict.to_str().unwrap();

    cli_cmd()
        .args(["check", "--dict", dict, "APPLE", "banana", "Durian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APPLE: true"))
        .stdout(predicate::str::contains("banana: true"))
        .stdout(predicate::str::contains("Durian: false"));

    cli_cmd()
        .args(["size", "--dict", dict])
        .assert()
        .success()
        .stdout(predicate::str::contains("4"));
}

#[test]
fn stats_reports_occupancy() {
    let tmp = tempdir().expect("tempdir");
    let dict = tmp.path().join("words.txt");
    fs::write(&dict, "tea\neat\n").expect("write dict");

    cli_cmd()
        .args(["stats", "--dict", dict.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries: 2"))
        .stdout(predicate::str::contains("used buckets: 1/10000"))
        .stdout(predicate::str::contains("longest chain: 2"));
}

#[test]
fn missing_dict_fails() {
    let tmp = tempdir().expect("tempdir");
    let absent = tmp.path().join("absent.txt");

    cli_cmd()
        .args(["size", "--dict", absent.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading word list"));
}
