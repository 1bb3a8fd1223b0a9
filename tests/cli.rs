use assert_cmd::Command;
use predicates::prelude::*;

fn xcurve() -> Command {
    Command::cargo_bin("xcurve").unwrap()
}

#[test]
fn test_dump_table() {
    let output = xcurve()
        .args(["--dump", "sin(x) + x**2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 401);
    assert_eq!(lines[0], "x\ty");
    assert!(lines[1].starts_with("-10\t100.54402111088"));
    assert!(lines[400].starts_with("10\t99.45597888911"));
}

#[test]
fn test_dump_custom_range() {
    xcurve()
        .args(["--dump", "--low", "-1", "--high", "1", "--points", "3", "x**2"])
        .assert()
        .success()
        .stdout("x\ty\n-1\t1\n0\t0\n1\t1\n");
}

#[test]
fn test_unknown_name_fails() {
    xcurve()
        .args(["--dump", "foo(x)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name 'foo'"));
}

#[test]
fn test_capabilities_rejected() {
    xcurve()
        .args(["--dump", "__import__('os')"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_expression_from_stdin() {
    xcurve()
        .arg("--dump")
        .write_stdin("2+2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\t4\n"))
        .stdout(predicate::str::contains("f(x)").not());
}

#[test]
fn test_empty_stdin() {
    xcurve()
        .arg("--dump")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expression given"));
}

#[test]
fn test_invalid_config() {
    xcurve()
        .args(["--dump", "--points", "1", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid point count"));

    xcurve()
        .args(["--dump", "--low", "5", "--high", "1", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid x-range"));
}

#[test]
fn test_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("xcurve.log");

    xcurve()
        .args(["--dump", "--points", "5", "--log"])
        .arg(&log)
        .arg("x / 0")
        .assert()
        .success()
        .stdout(predicate::str::contains("inf"));

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Xcurve"));
    assert!(contents.contains("Xcurve exited"));
}
