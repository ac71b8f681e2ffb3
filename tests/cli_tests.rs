//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn preset_updater() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("preset-updater"))
}

#[test]
fn test_cli_version() {
    let mut cmd = preset_updater();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("preset-updater"));
}

#[test]
fn test_cli_help() {
    let mut cmd = preset_updater();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Merge `set` assignments"))
        .stdout(predicate::str::contains("PRESET_FILE"))
        .stdout(predicate::str::contains("DIFF_FILE"));
}

#[test]
fn test_missing_arguments_prints_usage_and_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = preset_updater();
    cmd.current_dir(dir.path()).arg("preset.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: preset-updater <preset_file> <diff_file>"));

    let mut no_args = preset_updater();
    no_args.current_dir(dir.path());
    no_args.assert().success().stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_update_scenario_with_explicit_output() {
    let dir = TempDir::new().expect("temp dir");
    let preset = dir.path().join("preset.txt");
    let diff = dir.path().join("diff.txt");
    let output = dir.path().join("merged.txt");
    fs::write(&preset, "set Gain = 5 ; dB gain\r\nset Mode = 1\r\nset Other = 7\r\n\r\n")
        .expect("write preset");
    fs::write(&diff, "# diff all\nset Gain = 10 ; dB gain\nset Mode = 2\nsave\n")
        .expect("write diff");

    let mut cmd = preset_updater();
    cmd.current_dir(dir.path()).args([
        preset.to_str().expect("utf8 preset path"),
        diff.to_str().expect("utf8 diff path"),
        output.to_str().expect("utf8 output path"),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 2 'set' commands to use for updating."))
        .stdout(predicate::str::contains("Processing complete. Updated 2 lines."))
        .stdout(predicate::str::contains("Success!"));

    let written = fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "set Gain = 10 ; dB gain\nset Mode = 2\nset Other = 7\n\n");
}

#[test]
fn test_default_output_written_to_current_directory() {
    let inputs = TempDir::new().expect("inputs dir");
    let cwd = TempDir::new().expect("cwd dir");
    let preset = inputs.path().join("race.txt");
    let diff = inputs.path().join("diff.txt");
    fs::write(&preset, "set Mode = 1\n").expect("write preset");
    fs::write(&diff, "set Mode = 3\n").expect("write diff");

    let mut cmd = preset_updater();
    cmd.current_dir(cwd.path()).args([
        preset.to_str().expect("utf8 preset path"),
        diff.to_str().expect("utf8 diff path"),
    ]);
    cmd.assert().success().stdout(predicate::str::contains("Output file: updated_race.txt"));

    let written = fs::read_to_string(cwd.path().join("updated_race.txt")).expect("read output");
    assert_eq!(written, "set Mode = 3\n");
    assert_eq!(fs::read_to_string(&preset).expect("read preset"), "set Mode = 1\n");
}

#[test]
fn test_config_file_sets_output_prefix() {
    let cwd = TempDir::new().expect("cwd dir");
    fs::write(cwd.path().join("preset-updater.toml"), "output_prefix = 'tuned_'\n")
        .expect("write config");
    fs::write(cwd.path().join("race.txt"), "set Mode = 1").expect("write preset");
    fs::write(cwd.path().join("diff.txt"), "set Mode = 2").expect("write diff");

    let mut cmd = preset_updater();
    cmd.current_dir(cwd.path()).args(["race.txt", "diff.txt"]);
    cmd.assert().success();

    let written = fs::read_to_string(cwd.path().join("tuned_race.txt")).expect("read output");
    assert_eq!(written, "set Mode = 2");
}

#[test]
fn test_missing_diff_file_fails_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("preset.txt"), "set Mode = 1\n").expect("write preset");

    let mut cmd = preset_updater();
    cmd.current_dir(dir.path()).args(["preset.txt", "missing.txt", "out.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Script failed due to errors reading the input files."))
        .stderr(predicate::str::contains("Input file 'missing.txt' not found."));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_missing_preset_file_fails_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("diff.txt"), "set Mode = 2\n").expect("write diff");

    let mut cmd = preset_updater();
    cmd.current_dir(dir.path()).args(["missing.txt", "diff.txt", "out.txt"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Found 1 'set' commands"))
        .stderr(predicate::str::contains("Input file 'missing.txt' not found."));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_reapplying_output_is_idempotent() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("preset.txt"), "  set Gain = 5   ; gain\nset Mode=1\n# end\n")
        .expect("write preset");
    fs::write(dir.path().join("diff.txt"), "set Gain = 10\nset Mode = 2\n").expect("write diff");

    let mut first = preset_updater();
    first.current_dir(dir.path()).args(["preset.txt", "diff.txt", "first.txt"]);
    first.assert().success();

    let mut second = preset_updater();
    second.current_dir(dir.path()).args(["first.txt", "diff.txt", "second.txt"]);
    second.assert().success();

    let first_out = fs::read_to_string(dir.path().join("first.txt")).expect("read first");
    let second_out = fs::read_to_string(dir.path().join("second.txt")).expect("read second");
    assert_eq!(first_out, "set Gain = 10   ; gain\nset Mode = 2\n# end\n");
    assert_eq!(second_out, first_out);
}
