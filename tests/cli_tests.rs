//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("cli").unwrap()
}

#[test]
fn test_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_root_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: cli [OPTIONS] COMMAND [ARGS]...",
        ))
        .stdout(predicate::str::contains("--help-format <FORMAT>"))
        .stdout(predicate::str::contains("-v, --verbose"))
        .stdout(predicate::str::contains("main commands:"))
        .stdout(predicate::str::contains("app commands:"))
        .stdout(predicate::str::contains("  app inspect version  Get app version"));
}

#[test]
fn test_no_arguments_shows_help() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("cluster commands:"));
}

#[test]
fn test_app_help() {
    cli()
        .args(["app", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main commands:"))
        .stdout(predicate::str::contains("  build    Build an app"))
        .stdout(predicate::str::contains("  inspect  Inspect commands"))
        .stdout(predicate::str::contains("inspect commands:"))
        .stdout(predicate::str::contains("  inspect name     Get app name"))
        .stdout(predicate::str::contains("  inspect version  Get app version"));
}

#[test]
fn test_inspect_version() {
    cli()
        .args(["app", "inspect", "version"])
        .assert()
        .success()
        .stdout("version is x.y.z\n");
}

#[test]
fn test_image_build() {
    cli()
        .args(["image", "build", "widget"])
        .assert()
        .success()
        .stdout("Building image: widget\n");
}

#[test]
fn test_double_dash_passes_dashed_name() {
    cli()
        .args(["app", "build", "--", "-x"])
        .assert()
        .success()
        .stdout("Building app: -x\n");
}

#[test]
fn test_verbose_flag_keeps_stdout_clean() {
    cli()
        .args(["-v", "cluster", "clean", "east"])
        .assert()
        .success()
        .stdout("Cleaning cluster: east\n");
}

#[test]
fn test_missing_argument() {
    cli()
        .args(["cluster", "load"])
        .assert()
        .failure()
        .code(2) // Usage error
        .stdout(predicate::str::contains("Loading cluster:").not())
        .stderr(predicate::str::contains("Missing argument 'NAME'"));
}

#[test]
fn test_extra_argument() {
    cli()
        .args(["image", "push", "a", "b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Got unexpected extra argument (b)"));
}

#[test]
fn test_unknown_command() {
    cli()
        .arg("bogus")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No such command 'bogus'"))
        .stderr(predicate::str::contains("app, image, cluster"));
}

#[test]
fn test_json_help_format() {
    cli()
        .args(["--help-format", "json", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"main_commands\""))
        .stdout(predicate::str::contains("\"inspect version\""));
}

#[test]
fn test_help_format_from_env() {
    cli()
        .env("NESTCLI_HELP_FORMAT", "json")
        .arg("image")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}
