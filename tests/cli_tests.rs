//! Binary tests: prompts, user messages and the console trace.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn name_abbrevs_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_name_abbrevs"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_inputs(dir: &Path) {
    fs::write(dir.join("list.txt"), "ALICE\nBOB\n").unwrap();
    let values: String = ('A'..='Z').map(|letter| format!("{letter} 1\n")).collect();
    fs::write(dir.join("values.txt"), values).unwrap();
}

#[test]
fn test_binary_writes_results_and_reports_path() {
    let temp_dir = tempdir().unwrap();
    write_inputs(temp_dir.path());

    name_abbrevs_cmd(temp_dir.path())
        .args(["-i", "list.txt", "-s", "Smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results have been written to"))
        .stdout(predicate::str::contains("smith_list_abbrevs.txt"));

    let written = fs::read_to_string(temp_dir.path().join("smith_list_abbrevs.txt")).unwrap();
    assert_eq!(written, "ALICE\nAIC ALC ALI\n\nBOB\nBOB\n\n");
}

#[test]
fn test_trace_to_piped_stderr_has_no_color_codes() {
    let temp_dir = tempdir().unwrap();
    write_inputs(temp_dir.path());

    name_abbrevs_cmd(temp_dir.path())
        .args(["-i", "list.txt", "-s", "Smith"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded names"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_quiet_silences_console_trace() {
    let temp_dir = tempdir().unwrap();
    write_inputs(temp_dir.path());

    name_abbrevs_cmd(temp_dir.path())
        .args(["-i", "list.txt", "-s", "Smith", "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_empty_prompt_answers_report_missing_file() {
    let temp_dir = tempdir().unwrap();
    write_inputs(temp_dir.path());

    name_abbrevs_cmd(temp_dir.path())
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: The file '' was not found. Please check the file path and try again.\n\
             No valid names found in the input file. Exiting.\n",
        ));
}
