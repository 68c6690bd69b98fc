//! Integration tests for `reqfaker transform`.

use predicates::prelude::*;

use crate::common::TestProject;

const LOGIN_REQUEST: &str = "POST /login HTTP/1.1\r\n\
Host: example.com\r\n\
X-Request-Id: {{faker.uuid()}}\r\n\
\r\n\
user={{faker.lower(length=6, tag=user)}}&mail={{faker.lower(length=4, tag=user)}}@example.com";

#[test]
fn test_transform_file_to_stdout() {
    let project = TestProject::new();
    let request = project.write("login.http", LOGIN_REQUEST);

    let output = project.cmd().arg("transform").arg(&request).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(!stdout.contains("{{faker."));
    let id_re = regex::Regex::new(
        r"X-Request-Id: [0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\r\n",
    )
    .unwrap();
    assert!(id_re.is_match(&stdout), "{stdout}");

    // The 4-char tag reference is a prefix of the 6-char one
    let body = stdout.split("\r\n\r\n").nth(1).unwrap();
    let user = body.strip_prefix("user=").unwrap().split('&').next().unwrap();
    let mail = body.split("mail=").nth(1).unwrap().strip_suffix("@example.com").unwrap();
    assert_eq!(user.len(), 6);
    assert_eq!(mail, &user[..4]);
}

#[test]
fn test_transform_stdin() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("transform")
        .write_stdin("id={{faker.numeric(5)}}")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^id=[0-9]{5}$").unwrap());
}

#[test]
fn test_transform_to_output_file() {
    let project = TestProject::new();
    let request = project.write("req.http", "token={{faker.alphanumeric(32)}}\n");

    project
        .cmd()
        .arg("transform")
        .arg(&request)
        .arg("--output")
        .arg("out/req.http")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = project.read("out/req.http");
    let token = written.strip_prefix("token=").unwrap().trim_end();
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_unchanged_input_is_passed_through() {
    let project = TestProject::new();
    let text = "GET / HTTP/1.1\r\nHost: {{other.uuid()}}\r\n\r\n";

    project.cmd().arg("transform").write_stdin(text).assert().success().stdout(text);
}

#[test]
fn test_check_fails_without_placeholders() {
    let project = TestProject::new();
    let request = project.write("plain.http", "GET / HTTP/1.1\r\n\r\n");

    project
        .cmd()
        .arg("transform")
        .arg(&request)
        .arg("--check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No placeholders found in plain.http"));
}

#[test]
fn test_repeat_reuses_tags_across_requests() {
    let project = TestProject::new();
    let request = project.write("order.http", "order={{faker.numeric(8, tag=order)}} nonce={{faker.numeric(8)}}");

    let output = project
        .cmd()
        .arg("transform")
        .arg(&request)
        .arg("--repeat")
        .arg("3")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let orders: Vec<&str> =
        stdout.lines().map(|line| line.split(' ').next().unwrap()).collect();
    assert_eq!(orders.len(), 3);
    assert!(orders.iter().all(|order| *order == orders[0]));
}

#[test]
fn test_failed_placeholder_does_not_abort_others() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("transform")
        .write_stdin("{{faker.alpha(abc)}} {{faker.unknownkind()}} {{faker.upper(3)}}")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^INVALID_PLACEHOLDER INVALID_PLACEHOLDER [A-Z]{3}$").unwrap());
}

#[test]
fn test_prefix_flag() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("--prefix")
        .arg("burp_faker")
        .arg("transform")
        .write_stdin("{{burp_faker.custom(6, charset=ab)}}|{{faker.uuid()}}")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[ab]{6}\|\{\{faker\.uuid\(\)\}\}$").unwrap());
}

#[test]
fn test_replacement_records_are_logged() {
    let project = TestProject::new();
    let request = project.write("login.http", "{{faker.numeric(4)}}");

    project
        .cmd_with_logs()
        .arg("transform")
        .arg(&request)
        .assert()
        .success()
        .stderr(predicate::str::contains("[login.http] Replaced {{faker.numeric(4)}} -> "))
        .stderr(predicate::str::contains("regex faker enabled"));
}

#[test]
fn test_label_flag() {
    let project = TestProject::new();
    project
        .cmd_with_logs()
        .arg("transform")
        .arg("--label")
        .arg("Repeater")
        .write_stdin("{{faker.uuid()}}")
        .assert()
        .success()
        .stderr(predicate::str::contains("[Repeater] Replaced {{faker.uuid()}}"));
}

#[test]
fn test_missing_input_file() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("transform")
        .arg("absent.http")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read request from absent.http"));
}
