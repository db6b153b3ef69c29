//! Integration tests for the create-go-app binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command running inside `dir` with an empty config file and no
/// inherited overrides.
fn create_go_app(dir: &Path) -> Command {
    let config = dir.join("test-config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("create-go-app").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GOSTART_DEFAULTS__PREFIX")
        .env_remove("GOSTART_TEMPLATES__LOCAL_PATH")
        .arg("--config")
        .arg(&config);
    cmd
}

#[test]
fn help_lists_options() {
    let temp = TempDir::new().unwrap();
    create_go_app(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-go-app"))
        .stdout(predicate::str::contains("--prefix"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    create_go_app(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn creates_project_from_embedded_stub() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "--prefix", "example.com/acme", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create shop success."))
        .stdout(predicate::str::contains("bin/shop"))
        .stdout(predicate::str::contains("Getting Started please read README.md"));

    let root = temp.path().join("shop");
    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/acme/shop\n"));

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# shop\n"));
    assert!(!readme.contains("{{"));
}

#[test]
fn nested_project_path_uses_last_component_as_name() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["services/shop", "-p", "example.com", "-y"])
        .assert()
        .success();

    let go_mod = fs::read_to_string(temp.path().join("services/shop/go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/shop\n"));
}

#[test]
fn trailing_slash_in_prefix_is_dropped() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com/org/", "-y"])
        .assert()
        .success();

    let go_mod = fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/org/shop\n"));
}

#[test]
fn no_color_accepts_any_non_empty_value() {
    let temp = TempDir::new().unwrap();

    for value in ["1", "yes", "true"] {
        create_go_app(temp.path())
            .env("NO_COLOR", value)
            .args(["shop", "-p", "example.com", "-y", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn output_dir_is_parent_of_project() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--output-dir", "out"])
        .assert()
        .success();

    assert!(temp.path().join("out/shop/main.go").is_file());
}

#[test]
fn rerun_overwrites_existing_project() {
    let temp = TempDir::new().unwrap();
    let args = ["shop", "-p", "example.com", "-y"];

    create_go_app(temp.path()).args(args).assert().success();
    let first = fs::read_to_string(temp.path().join("shop/config/app.json")).unwrap();

    create_go_app(temp.path()).args(args).assert().success();
    let second = fs::read_to_string(temp.path().join("shop/config/app.json")).unwrap();

    // Fresh passwords on every run.
    assert_ne!(first, second);
}

#[test]
fn invalid_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["my-shop", "-p", "example.com", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name 'my-shop'"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("my-shop").exists());
}

#[test]
fn reserved_word_is_rejected() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["package", "-p", "example.com", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved word"));
}

#[test]
fn invalid_prefix_is_rejected() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "https://example.com", "-y"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid prefix"));
}

#[test]
fn missing_name_without_terminal_is_usage_error() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["-p", "example.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please specify the project name"));
}

#[test]
fn missing_prefix_without_terminal_is_usage_error() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please specify the module prefix"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("go.mod"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn json_output_is_the_report() {
    let temp = TempDir::new().unwrap();

    let assert = create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let outcomes = report["outcomes"].as_array().unwrap();
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|o| o["status"] == "succeeded"));
    assert!(report["root"].as_str().unwrap().ends_with("shop"));
}

#[test]
fn config_file_supplies_prefix_and_database() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("test-config.toml"),
        "[defaults]\nprefix = \"example.org/team\"\n\n[database]\ncharset = \"utf8mb4\"\n",
    )
    .unwrap();

    create_go_app(temp.path())
        .args(["shop", "-y"])
        .assert()
        .success();

    let go_mod = fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.org/team/shop\n"));
    let app = fs::read_to_string(temp.path().join("shop/config/app.json")).unwrap();
    assert!(app.contains("\"charset\": \"utf8mb4\""));
}

#[test]
fn environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("test-config.toml"),
        "[defaults]\nprefix = \"example.org/team\"\n",
    )
    .unwrap();

    create_go_app(temp.path())
        .env("GOSTART_DEFAULTS__PREFIX", "env.example.com")
        .args(["shop", "-y"])
        .assert()
        .success();

    let go_mod = fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.starts_with("module env.example.com/shop\n"));
}

#[test]
fn missing_explicit_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("create-go-app")
        .unwrap()
        .current_dir(temp.path())
        .env("NO_COLOR", "1")
        .args(["--config", "does-not-exist.toml", "shop", "-p", "example.com"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn template_dir_with_stub_metadata() {
    let temp = TempDir::new().unwrap();
    let stub = temp.path().join("my-stub");
    fs::create_dir_all(stub.join("cmd")).unwrap();
    fs::write(stub.join("stub.toml"), "module = \"example.net/base\"\nversion = \"v9\"\n").unwrap();
    fs::write(stub.join("go.mod"), "module example.net/base\n").unwrap();
    fs::write(
        stub.join("cmd/main.go"),
        "import \"example.net/base/pkg\" // {{ .StubVersion }}\n",
    )
    .unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--template-dir", "my-stub"])
        .assert()
        .success();

    let root = temp.path().join("shop");
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module example.com/shop\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("cmd/main.go")).unwrap(),
        "import \"example.com/shop/pkg\" // v9\n"
    );
    assert!(!root.join("stub.toml").exists());
}

#[test]
fn missing_template_dir_is_not_found() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--template-dir", "nowhere"])
        .assert()
        .code(3);
}

fn stub_with_binary_file(dir: &Path) {
    let stub = dir.join("stub");
    fs::create_dir_all(&stub).unwrap();
    fs::write(stub.join("README.md"), "# {{ .Key }}\n").unwrap();
    fs::write(stub.join("logo.bin"), b"\xff\xfe\x00").unwrap();
}

#[test]
fn failed_entry_is_a_warning_by_default() {
    let temp = TempDir::new().unwrap();
    stub_with_binary_file(temp.path());

    create_go_app(temp.path())
        .args(["shop", "-p", "example.com", "-y", "--template-dir", "stub"])
        .assert()
        .success()
        .stderr(predicate::str::contains("logo.bin"));

    assert_eq!(
        fs::read_to_string(temp.path().join("shop/README.md")).unwrap(),
        "# shop\n"
    );
    assert!(!temp.path().join("shop/logo.bin").exists());
}

#[test]
fn strict_turns_failed_entry_into_error() {
    let temp = TempDir::new().unwrap();
    stub_with_binary_file(temp.path());

    create_go_app(temp.path())
        .args([
            "shop",
            "-p",
            "example.com",
            "-y",
            "--template-dir",
            "stub",
            "--strict",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 2 files could not be created"));

    // Other entries are still written.
    assert!(temp.path().join("shop/README.md").is_file());
}

#[test]
fn quiet_still_reports_failed_entries() {
    let temp = TempDir::new().unwrap();
    stub_with_binary_file(temp.path());

    create_go_app(temp.path())
        .args(["-q", "shop", "-p", "example.com", "-y", "--template-dir", "stub"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("logo.bin"));
}

#[test]
fn json_mode_still_reports_failed_entries_on_stderr() {
    let temp = TempDir::new().unwrap();
    stub_with_binary_file(temp.path());

    let assert = create_go_app(temp.path())
        .args([
            "shop",
            "-p",
            "example.com",
            "-y",
            "--template-dir",
            "stub",
            "--output-format",
            "json",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("logo.bin"));

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["outcomes"][1]["status"], "failed");
    assert_eq!(report["outcomes"][1]["error"]["kind"], "manifest-integrity");
}

#[test]
fn quiet_suppresses_success_output() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["-q", "shop", "-p", "example.com", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn global_flags_work_after_subcommand() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("create-go-app")
        .unwrap()
        .current_dir(temp.path())
        .args(["completions", "zsh", "--no-color", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create-go-app"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();

    create_go_app(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create-go-app"));
}
