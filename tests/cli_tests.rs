//! CLI interface tests for the demo binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("hype ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hype demo application"))
        .stdout(predicate::str::contains("--greet <STR>"))
        .stdout(predicate::str::contains("--add <INT>"))
        .stdout(predicate::str::contains("[deprecated]"))
        .stdout(predicate::str::contains("-V, --version"));
}

#[test]
fn test_greet_dispatches_value() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--greet")
        .arg("World")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World!"))
        .stdout(predicate::str::contains("Sum: 0"));
}

#[test]
fn test_multi_parameter_command_warns() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--add")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum: 5"))
        .stdout(predicate::str::contains("declares 2 parameters"));
}

#[test]
fn test_invalid_integer_exits_with_option_code() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--add")
        .arg("five")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("expects a value of type int"));
}

#[test]
fn test_deprecated_command_warns_and_runs() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--shout")
        .arg("hi")
        .assert()
        .success()
        .stdout(predicate::str::contains("HI"))
        .stdout(predicate::str::contains("--shout is deprecated"));
}

#[test]
fn test_unknown_option_fails() {
    let mut cmd = Command::cargo_bin("hype").unwrap();
    cmd.arg("--nope")
        .arg("x")
        .assert()
        .failure()
        .code(2);
}
