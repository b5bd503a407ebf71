use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use schedule_ron::{parse, Schedule};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn fixture_schedule() -> Schedule {
    parse(&fs::read_to_string(fixture_path("schedule.ron")).unwrap()).unwrap()
}

#[test]
fn convert_to_xml_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("week.xml");

    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("convert")
        .arg(fixture_path("schedule.ron"))
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 days:"))
        .stdout(predicate::str::contains("1. Monday (2 lessons):"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert_eq!(xml.matches("<day>").count(), 3);
    assert!(xml.contains("<name>Saturday</name>"));
}

#[test]
fn convert_to_ron_file_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("week.ron");

    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("convert")
        .arg(fixture_path("schedule.json"))
        .arg("-o")
        .arg(&output)
        .arg("--quiet");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let ron = fs::read_to_string(&output).unwrap();
    assert_eq!(parse(&ron).unwrap(), fixture_schedule());
}

#[test]
fn convert_without_output_writes_toml_to_stdout_only() {
    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("convert").arg(fixture_path("schedule.ron"));

    let assert = cmd
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[[days]]\nname = \"Monday\"\n"))
        .stdout(predicate::str::contains("days:").not())
        .stdout(predicate::str::contains("(2 lessons)").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let decoded: Schedule = toml::from_str(&stdout).unwrap();
    assert_eq!(decoded, fixture_schedule());
}

#[test]
fn convert_with_explicit_format_flags() {
    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("convert")
        .arg(fixture_path("schedule.ron"))
        .arg("--from")
        .arg("ron")
        .arg("--to")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"lecture\""));
}

#[test]
fn show_prints_listing() {
    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("show").arg(fixture_path("schedule.ron"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 days:"))
        .stdout(predicate::str::contains("2. Wednesday (1 lessons):"))
        .stdout(predicate::str::contains("3. Saturday (0 lessons):"));
}

#[test]
fn malformed_input_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.ron");
    let output = dir.path().join("broken.toml");
    fs::write(&input, "Schedule(days: [Week()])").unwrap();

    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("convert").arg(&input).arg("-o").arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: parsing error: unknown type: Week at offset 16",
        ));

    assert!(!output.exists());
}

#[test]
fn lexical_error_is_reported_with_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.ron");
    fs::write(&input, "Schedule(days: @)").unwrap();

    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("show").arg(&input);

    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "Error: tokenization error: unexpected character '@' at offset 15",
    ));
}

#[test]
fn strict_flag_rejects_mistyped_field() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mistyped.ron");
    fs::write(
        &input,
        r#"Schedule(days: [Day(name: "Mon", lessons: [Lesson(room: [])])])"#,
    )
    .unwrap();

    let mut lenient = cargo_bin_cmd!("schedule");
    lenient.arg("show").arg(&input);
    lenient.assert().success();

    let mut strict = cargo_bin_cmd!("schedule");
    strict.arg("show").arg(&input).arg("--strict");
    strict
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "expected string for field `room` of Lesson, got array",
        ));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let mut cmd = cargo_bin_cmd!("schedule");
    cmd.arg("show").arg(fixture_path("no_such_file.ron"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error: failed to read"));
}
