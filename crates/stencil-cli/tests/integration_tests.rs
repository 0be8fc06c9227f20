//! Integration tests for the stencil binary.

use std::{fs, path::Path};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Command running in `dir` with no user config, `.env` or log overrides.
fn stencil(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("stencil");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".no-config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("STENCIL_DEFAULTS__REPO")
        .env_remove("STENCIL_DEFAULTS__DESCRIPTION")
        .env_remove("STENCIL_DEFAULTS__REPO_PATH")
        .env_remove("STENCIL_DEFAULTS__OUTPUT_DIR");
    cmd
}

fn files_under(root: &Path) -> Vec<String> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .filter(|p| !p.starts_with(".no-config"))
        .collect();
    files.sort();
    files
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--desc"))
        .stdout(predicate::str::contains("--repo-path"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path()).arg("--lang").assert().code(2);
    assert!(files_under(temp.path()).is_empty());
}

// ── generation ────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_generate_my_project() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created file ./Makefile with content from templates/makefile.txt.",
        ))
        .stdout(predicate::str::contains("Project MyProject created successfully!"));

    assert_eq!(files_under(temp.path()).len(), 21);
    let main = fs::read_to_string(temp.path().join("cmd/MyProject/main.go")).unwrap();
    assert!(main.contains("github.com/yourusername/yourrepo/api"));
    assert!(main.contains("A sample project structure created by Go CLI"));
}

#[test]
fn test_widget_project() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args([
            "--repo",
            "Widget",
            "--desc",
            "demo",
            "--repo-path",
            "example.com/widget",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Widget created successfully!"));

    let files = files_under(temp.path());
    assert_eq!(files.len(), 21);
    assert!(files.contains(&"cmd/Widget/main.go".to_string()));
    assert!(!files.iter().any(|f| f.contains("{projectName}")));

    let main = fs::read_to_string(temp.path().join("cmd/Widget/main.go")).unwrap();
    assert!(main.contains("// Command Widget: demo"));
    assert!(main.contains("\"example.com/widget/server\""));

    let makefile = fs::read_to_string(temp.path().join("Makefile")).unwrap();
    assert!(makefile.contains("# Widget: demo"));
    assert!(!makefile.contains("{{Description}}"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let args = ["--repo", "Widget"];

    stencil(temp.path()).args(args).assert().success();
    let first: Vec<_> = files_under(temp.path())
        .iter()
        .map(|f| fs::read(temp.path().join(f)).unwrap())
        .collect();

    stencil(temp.path()).args(args).assert().success();
    let second: Vec<_> = files_under(temp.path())
        .iter()
        .map(|f| fs::read(temp.path().join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_output_directory_flag() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["--repo", "Widget", "-o", "widget"])
        .assert()
        .success();

    assert!(temp.path().join("widget/cmd/Widget/main.go").is_file());
    assert!(!temp.path().join("Makefile").exists());
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(files_under(temp.path()).len(), 21);
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_still_generates_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    let out = std::process::Command::new(env!("CARGO_BIN_EXE_stencil"))
        .current_dir(temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".no-config"))
        .env("HOME", temp.path())
        .env_remove("RUST_LOG")
        .env_remove("STENCIL_DEFAULTS__REPO")
        .env_remove("STENCIL_DEFAULTS__OUTPUT_DIR")
        .args(["--repo", "Widget"])
        .stdout(full)
        .output()
        .unwrap();

    assert!(out.status.success(), "exit: {:?}", out.status.code());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Console output failed"));
    assert!(!stderr.contains("I/O error"));
    assert_eq!(files_under(temp.path()).len(), 21);
}

// ── partial failure ───────────────────────────────────────────────────────────

#[test]
fn test_blocked_directory_still_reports_success() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("server"), "in the way").unwrap();

    stencil(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to create directory ./server"))
        .stdout(predicate::str::contains("Project MyProject created successfully!"))
        .stderr(predicate::str::contains("Entry skipped").not());

    assert!(temp.path().join("api/api.go").is_file());
    assert!(temp.path().join("cmd/MyProject/main.go").is_file());
    assert_eq!(
        fs::read_to_string(temp.path().join("server")).unwrap(),
        "in the way"
    );
}

#[test]
fn test_strict_fails_on_blocked_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("server"), "in the way").unwrap();

    stencil(temp.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("4 of 21 files could not be created"));
}

#[test]
fn test_strict_clean_run_succeeds() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path()).arg("--strict").assert().success();
}

// ── informational modes ───────────────────────────────────────────────────────

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["--repo", "Widget", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmd/Widget/main.go"))
        .stdout(predicate::str::contains("templates/main.txt"))
        .stdout(predicate::str::contains("No files were written."));

    assert!(files_under(temp.path()).is_empty());
}

#[test]
fn test_list_templates() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .arg("--list-templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("/cmd/{projectName}/main.go"))
        .stdout(predicate::str::contains("api_helpers.txt"))
        .stdout(predicate::str::contains("{{RepoPath}}"));

    assert!(files_under(temp.path()).is_empty());
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();

    let out = stencil(temp.path())
        .args(["--repo", "Widget", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["project"], "Widget");
    assert_eq!(report["created"], 21);
    assert_eq!(report["failed"], 0);
    assert_eq!(report["entries"].as_array().unwrap().len(), 21);
}

#[test]
fn test_json_report_includes_failures() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("users"), "x").unwrap();

    let out = stencil(temp.path())
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["failed"], 3);
    let kinds: Vec<_> = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["error"]["kind"].as_str())
        .collect();
    assert_eq!(kinds, vec!["directory-creation"; 3]);
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"))
        .stdout(predicate::str::contains("--repo-path"));

    assert!(files_under(temp.path()).is_empty());
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn test_config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join(".no-config/stencil.toml");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(
        &config,
        "[defaults]\nrepo = \"FromFile\"\nrepo_path = \"example.com/fromfile\"\n",
    )
    .unwrap();

    stencil(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project FromFile created successfully!"));

    let main = fs::read_to_string(temp.path().join("cmd/FromFile/main.go")).unwrap();
    assert!(main.contains("example.com/fromfile/api"));
}

#[test]
fn test_flag_beats_environment() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .env("STENCIL_DEFAULTS__REPO", "FromEnv")
        .assert()
        .success();
    assert!(temp.path().join("cmd/FromEnv/main.go").is_file());

    stencil(temp.path())
        .env("STENCIL_DEFAULTS__REPO", "FromEnv")
        .args(["--repo", "FromFlag"])
        .assert()
        .success();
    assert!(temp.path().join("cmd/FromFlag/main.go").is_file());
}

#[test]
fn test_missing_config_file_is_exit_four() {
    let temp = TempDir::new().unwrap();

    stencil(temp.path())
        .args(["--config", "absent.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));

    assert!(files_under(temp.path()).is_empty());
}
