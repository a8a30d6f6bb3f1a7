// End-to-end runs of the `fr` binary: exit codes, stdout, stderr.

use assert_cmd::Command;
use predicates::prelude::*;

fn fr() -> Command {
    let mut cmd = Command::cargo_bin("fr").unwrap();
    cmd.env_remove("FR_LOG");
    cmd
}

/// Run `fr` with `args`, assert the exit code, and return stderr lines.
fn stderr_lines(args: &[&str], code: i32) -> Vec<String> {
    let out = fr().args(args).output().unwrap();
    assert_eq!(out.status.code(), Some(code), "args: {args:?}");
    String::from_utf8(out.stderr)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn add_prints_reduced_fraction() {
    fr().args(["add", "1", "4", "2", "4"])
        .assert()
        .success()
        .stdout("Fraction: [3/4]\n")
        .stderr("");
}

#[test]
fn gcd_json_output() {
    fr().args(["--format", "json", "gcd", "12", "-18"])
        .assert()
        .success()
        .stdout("{\"op\":\"gcd\",\"result\":6}\n");
}

#[test]
fn incompatible_denominators_exit_4_with_one_error_line() {
    let lines = stderr_lines(&["add", "1", "4", "1", "3"], 4);
    assert_eq!(lines, ["fr: error: incompatible denominators: 4 != 3"]);
}

#[test]
fn quiet_still_prints_exactly_one_plain_error_line() {
    let lines = stderr_lines(&["--quiet", "add", "1", "4", "1", "3"], 4);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains('\u{1b}'), "no ANSI escapes when piped: {:?}", lines[0]);
}

#[test]
fn zero_numerator_divisor_exit_3() {
    fr().args(["div", "1", "2", "0", "3"])
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::starts_with("fr: error: invalid fraction"));
}

#[test]
fn unrepresentable_reduction_exit_5() {
    fr().args(["reduce", "1", "-9223372036854775808"])
        .assert()
        .code(5)
        .stderr("fr: error: arithmetic overflow\n");
}

#[test]
fn missing_operands_exit_2() {
    fr().args(["add", "1", "2"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("required"));
}

#[test]
fn help_and_version_exit_0_on_stdout() {
    fr().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    fr().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fr "));
}

#[test]
fn invalid_log_env_warns_once_and_still_runs() {
    let out = fr()
        .env("FR_LOG", "fr=loudest")
        .args(["mul", "2", "3", "3", "4"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Fraction: [1/2]\n");
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("fr: warning: ignoring FR_LOG"), "{stderr}");
}
