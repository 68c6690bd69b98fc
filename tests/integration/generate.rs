//! Integration tests for `reqfaker generate`.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_generate_uuid() {
    let project = TestProject::new();
    project.cmd().args(["generate", "uuid"]).assert().success().stdout(
        predicate::str::is_match(
            r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}\n$",
        )
        .unwrap(),
    );
}

#[test]
fn test_generate_lengths() {
    let project = TestProject::new();
    let cases = [
        (vec!["alpha"], r"^[A-Za-z]{8}\n$"),
        (vec!["lower", "12"], r"^[a-z]{12}\n$"),
        (vec!["upper", "length=3"], r"^[A-Z]{3}\n$"),
        (vec!["numeric", "0"], r"^\n$"),
        (vec!["alphanumeric", "20"], r"^[A-Za-z0-9]{20}\n$"),
        (vec!["custom", "10", "abc123!@#"], r"^[abc123!@#]{10}\n$"),
    ];

    for (args, pattern) in cases {
        project
            .cmd()
            .arg("generate")
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::is_match(pattern).unwrap());
    }
}

#[test]
fn test_generate_regex() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "regex", "[a-z]{3}[0-9]{2}"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[a-z]{3}[0-9]{2}\n$").unwrap());
}

#[test]
fn test_generate_regex_disabled() {
    let project = TestProject::with_config("regex_enabled = false\n");
    project
        .cmd()
        .args(["generate", "regex", "[0-9]{3}"])
        .assert()
        .success()
        .stdout("REGEX_NOT_SUPPORTED([0-9]{3})\n");
}

#[test]
fn test_generate_default_length_from_config() {
    let project = TestProject::with_config("default_length = 16\n");
    project
        .cmd()
        .args(["generate", "numeric"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9]{16}\n$").unwrap());
}

#[test]
fn test_generate_unknown_kind() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "unknownkind"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid placeholder 'unknownkind'"))
        .stderr(predicate::str::contains("Supported kinds are"));
}

#[test]
fn test_generate_invalid_length() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "alpha", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length '-1'"));
}

#[test]
fn test_generate_length_above_maximum() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "alpha", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum of 1048576"))
        .stderr(predicate::str::contains("no larger than max_length"));
}

#[test]
fn test_generate_custom_without_charset() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "custom", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("charset"));
}

#[test]
fn test_generate_invalid_regex() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["generate", "regex", "[a-z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot generate a value for regex '[a-z'"));
}
