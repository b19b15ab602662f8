// profanity/tests/cli_integration_tests.rs
//! Command-line integration tests for the `profanity` binary.
//!
//! Each test runs the real executable with `assert_cmd`, feeding text on stdin
//! or through temporary files, and checks stdout, stderr and the exit code.
//! Output is never a terminal here, so no colour codes need stripping.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn profanity() -> Command {
    let mut cmd = Command::cargo_bin("profanity").unwrap();
    cmd.env_remove("PROFANITY_CONFIG");
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn write_temp(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test_log::test]
fn test_sanitise_default_strategy_removes_words() {
    profanity()
        .args(["sanitise", "--only-words", "-w", "fuck,shit", "--no-summary"])
        .write_stdin("This is a fucking string with some shitty words in it.")
        .assert()
        .success()
        .stdout("This is a string with some words in it.");
}

#[test_log::test]
fn test_sanitize_alias_and_fixed_symbols() {
    profanity()
        .args(["sanitize", "-w", "shit", "-s", "fixed-symbols", "--no-summary"])
        .write_stdin("oh sh1t")
        .assert()
        .success()
        .stdout("oh ####");
}

#[test_log::test]
fn test_sanitise_substitute_word() {
    profanity()
        .args(["sanitise", "--only-words", "-w", "fuck", "-w", "shit", "-s", "substitute-word"])
        .write_stdin("fuck shit")
        .assert()
        .success()
        .stdout("fiddlesticks sugar")
        .stderr(predicate::str::contains("Substitution Summary:"))
        .stderr(predicate::str::contains("shit (1 occurrence)"));
}

#[test_log::test]
fn test_sanitise_unknown_strategy_is_an_error() {
    profanity()
        .args(["sanitise", "-w", "shit", "-s", "sparkles"])
        .write_stdin("shit")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown substitution strategy 'sparkles'"));
}

#[test_log::test]
fn test_check_exit_codes() {
    profanity()
        .args(["check", "-w", "shit"])
        .write_stdin("perfectly polite")
        .assert()
        .success()
        .stdout("clean\n");

    profanity()
        .args(["check", "-w", "shit"])
        .write_stdin("well 5hit")
        .assert()
        .code(1)
        .stdout("5\t5hit\t(shit)\n");
}

#[test_log::test]
fn test_check_json_report() -> Result<()> {
    let output = profanity()
        .args(["check", "--only-words", "-w", "shit", "--json"])
        .write_stdin("shit sh1t")
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["clean"], false);
    let offsets: Vec<u64> = report["bad_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["offset"].as_u64().unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 5]);
    Ok(())
}

#[test_log::test]
fn test_sanitise_json_output() -> Result<()> {
    let output = profanity()
        .args(["sanitise", "--only-words", "-w", "shit", "--json"])
        .write_stdin("no shit here")
        .output()?;
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(result["output"], "no here");
    assert_eq!(result["clean"], false);
    assert_eq!(result["bad_length"], 4);
    assert_eq!(result["bad_words"][0]["offset"], 2);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Summary"));
    Ok(())
}

#[test_log::test]
fn test_input_and_output_files() -> Result<()> {
    let input = write_temp("a darn line\nanother line\n")?;
    let out = NamedTempFile::new()?;

    profanity()
        .args(["sanitise", "-w", "darn", "-s", "fixed-word", "--no-summary", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Writing sanitised content to file"));

    assert_eq!(fs::read_to_string(out.path())?, "a fiddlesticks line\nanother line\n");
    Ok(())
}

#[test_log::test]
fn test_config_file_overrides_defaults() -> Result<()> {
    let config = write_temp(
        "bad_words: [heck]\nreplacement_characters: \"*\"\nsubstitution: fixed-symbols\n",
    )?;

    profanity()
        .args(["sanitise", "--no-summary", "-c"])
        .arg(config.path())
        .write_stdin("what the h3ck")
        .assert()
        .success()
        .stdout("what the ****");
    Ok(())
}

#[test_log::test]
fn test_config_from_environment() -> Result<()> {
    let config = write_temp("bad_words: [heck]\n")?;

    profanity()
        .env("PROFANITY_CONFIG", config.path())
        .args(["check"])
        .write_stdin("heck")
        .assert()
        .code(1);
    Ok(())
}

#[test_log::test]
fn test_invalid_config_file_is_an_error() -> Result<()> {
    let config = write_temp("bad_words: [\"\"]\n")?;

    profanity()
        .args(["check", "-c"])
        .arg(config.path())
        .write_stdin("anything")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test_log::test]
fn test_diff_view() {
    profanity()
        .args(["sanitise", "--only-words", "-w", "shit", "--diff", "--no-summary"])
        .write_stdin("keep\nno shit here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-no shit here"))
        .stdout(predicate::str::contains("+no here"));
}

#[test_log::test]
fn test_quiet_suppresses_summary() {
    profanity()
        .args(["-q", "sanitise", "-w", "shit"])
        .write_stdin("shit")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test_log::test]
fn test_missing_subcommand_shows_help() {
    profanity()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
