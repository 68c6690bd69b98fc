//! Integration tests for `reqfaker menu`.

use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_menu_text() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insert uuid"))
        .stdout(predicate::str::contains("{{faker.custom(10, abc123!@#)}}"))
        .stdout(predicate::str::contains("{{faker.regex([a-z]{3}[0-9]{2})}}"))
        .stdout(predicate::str::contains("(disabled)").not());
}

#[test]
fn test_menu_json() {
    let project = TestProject::new();
    let output = project.cmd().args(["menu", "--format", "json"]).assert().success();

    let entries: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let entries = entries.as_array().unwrap();
    let labels: Vec<&str> = entries.iter().map(|e| e["label"].as_str().unwrap()).collect();
    assert_eq!(
        labels,
        [
            "Insert uuid",
            "Insert alphanumeric(16)",
            "Insert alpha(10)",
            "Insert lower(10)",
            "Insert upper(10)",
            "Insert numeric(10)",
            "Insert custom(10, abc123!@#)",
            "Insert regex",
        ]
    );
    assert_eq!(entries[0]["template"], "{{faker.uuid()}}");
    assert!(entries.iter().all(|e| e["enabled"] == true));
}

#[test]
fn test_menu_regex_disabled_with_prefix() {
    let project = TestProject::with_config("regex_enabled = false\n");
    let output = project
        .cmd()
        .args(["--prefix", "burp_faker", "menu", "--format", "json"])
        .assert()
        .success();

    let entries: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let regex = &entries[7];
    assert_eq!(regex["template"], "{{burp_faker.regex([a-z]{3}[0-9]{2})}}");
    assert_eq!(regex["enabled"], false);
    assert_eq!(entries[6]["enabled"], true);
}

#[test]
fn test_menu_rejects_unknown_format() {
    let project = TestProject::new();
    project.cmd().args(["menu", "--format", "yaml"]).assert().failure();
}
