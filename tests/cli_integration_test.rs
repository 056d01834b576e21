use assert_cmd::Command;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const ANSI_ESCAPE: &str = "\x1b[";

fn sample() -> Command {
    let mut cmd = Command::cargo_bin("workbench-sample").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("WORKBENCH_SAMPLE_CONFIG")
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_default_run_prints_fixed_text() {
    let expected = indoc! {"
        WebOS Code Editor - Python Example
        ========================================
        First 10 Fibonacci numbers: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        Squares: [1, 4, 9, 16, 25, 36, 49, 64, 81, 100]
        amiga_gray: #a0a0a0
        amiga_blue: #0055aa
        amiga_orange: #ffaa00

        Hello from WebOS Code Editor!
        Hello, Amiga!
        Doubled: [2, 4, 6, 8, 10]
    "};
    assert_eq!(stdout_of(&mut sample()), expected);
}

#[test]
fn test_json_format() {
    let stdout = stdout_of(sample().args(["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["python"]["fibonacci"].as_array().unwrap().len(), 10);
    assert_eq!(value["python"]["colors"].as_array().unwrap().len(), 3);
    assert_eq!(value["javascript"]["greeting"], "Hello, Amiga!");
}

#[test]
fn test_terms_flag() {
    let stdout = stdout_of(sample().args(["-n", "2"]));
    assert!(stdout.contains("First 2 Fibonacci numbers: [0, 1]"));
}

#[test]
fn test_terms_beyond_128_bits() {
    let stdout = stdout_of(sample().args(["-n", "188"]));
    assert!(stdout.contains("First 188 Fibonacci numbers:"));
    assert!(stdout.contains("538522340430300790495419781092981030533]"));
}

#[test]
fn test_negative_terms_fail_without_output() {
    let output = sample().args(["--terms", "-1"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("must be non-negative"), "stderr: {stderr}");
}

#[test]
fn test_config_file_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fibonacci_terms = 3\ngreet_name = \"Lisa\"").unwrap();

    let stdout = stdout_of(sample().arg("--config").arg(file.path()));
    assert!(stdout.contains("First 3 Fibonacci numbers: [0, 1, 1]"));
    assert!(stdout.contains("Hello, Lisa!"));
}

#[test]
fn test_terms_flag_wins_over_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fibonacci_terms = 3").unwrap();

    let stdout = stdout_of(sample().arg("--config").arg(file.path()).args(["-n", "5"]));
    assert!(stdout.contains("First 5 Fibonacci numbers: [0, 1, 1, 2, 3]"));
}

#[test]
fn test_oversized_squares_in_config_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "squares_upto = 4294967295").unwrap();

    let output = sample().arg("--config").arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("squares_upto"), "stderr: {stderr}");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let output = sample()
        .args(["--config", "/nonexistent/workbench-sample.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_forced_color_paints_swatches() {
    let stdout = stdout_of(sample().args(["--color", "always"]));
    assert!(stdout.contains(ANSI_ESCAPE));
    assert!(stdout.contains("#ffaa00"));
    // Only palette values are painted
    assert!(stdout.starts_with("WebOS Code Editor - Python Example\n"));
}

#[test]
fn test_clicolor_force_enables_color_in_auto_mode() {
    let stdout = stdout_of(sample().env("CLICOLOR_FORCE", "1").args(["--color", "auto"]));
    assert!(stdout.contains(ANSI_ESCAPE));
}

#[test]
fn test_clicolor_force_overrides_no_color() {
    let stdout = stdout_of(sample().env("NO_COLOR", "1").env("CLICOLOR_FORCE", "1"));
    assert!(stdout.contains(ANSI_ESCAPE));
}

#[test]
fn test_no_color_keeps_auto_mode_plain() {
    let stdout = stdout_of(sample().env("NO_COLOR", "1").args(["--color", "auto"]));
    assert!(!stdout.contains(ANSI_ESCAPE));
}

#[test]
fn test_clicolor_zero_keeps_auto_mode_plain() {
    let stdout = stdout_of(sample().env("CLICOLOR", "0"));
    assert!(!stdout.contains(ANSI_ESCAPE));
}

#[test]
fn test_explicit_always_overrides_no_color() {
    let stdout = stdout_of(sample().env("NO_COLOR", "1").args(["--color", "always"]));
    assert!(stdout.contains(ANSI_ESCAPE));
}
