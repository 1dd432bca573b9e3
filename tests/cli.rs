//! Integration tests for the spacegit binary.
//!
//! Every test gets its own spaces root and config file, so nothing is read
//! from the user's home directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp dir holding `config.toml` and a `spaces/` root.
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let spaces = dir.path().join("spaces");
        fs::create_dir(&spaces).unwrap();

        let config = format!(
            "spaces_root = {:?}\n\n[git]\nuser_name = \"Test User\"\nuser_email = \"test@example.com\"\n\n[log]\nlevel = \"warn\"\n",
            spaces.display().to_string()
        );
        fs::write(dir.path().join("config.toml"), config).unwrap();

        Self { dir }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn space(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join("spaces").join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("spacegit").unwrap();
        cmd.arg("--config").arg(self.config_path());
        cmd
    }

    /// Init `name` and commit one file in it.
    fn initialized_space(&self, name: &str) -> PathBuf {
        let path = self.space(name);
        self.cmd().args(["init", name]).assert().success();
        self.cmd()
            .args(["commit", name, "-m", "init", "README.md", "--content", "# hi\n"])
            .assert()
            .success();
        path
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("spacegit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkout"))
        .stdout(predicate::str::contains("revert"))
        .stdout(predicate::str::contains("spaces"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("spacegit")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spacegit"));
}

#[test]
fn spaces_lists_directories() {
    let env = Env::new();
    env.space("beta");
    env.space("alpha");

    env.cmd()
        .arg("spaces")
        .assert()
        .success()
        .stdout("alpha\nbeta\n");
}

#[test]
fn spaces_json() {
    let env = Env::new();
    env.space("demo");

    env.cmd()
        .args(["spaces", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spaces\": [\n    \"demo\"\n  ]"));
}

#[test]
fn root_flag_overrides_config() {
    let env = Env::new();
    let other = TempDir::new().unwrap();
    fs::create_dir(other.path().join("elsewhere")).unwrap();

    env.cmd()
        .arg("--root")
        .arg(other.path())
        .arg("spaces")
        .assert()
        .success()
        .stdout("elsewhere\n");
}

#[test]
fn init_commit_and_status() {
    let env = Env::new();
    let demo = env.initialized_space("demo");
    assert_eq!(read(&demo.join("README.md")), "# hi\n");

    fs::write(demo.join("new.txt"), "new\n").unwrap();
    env.cmd()
        .args(["status", "demo"])
        .assert()
        .success()
        .stdout("?? new.txt\n");

    env.cmd()
        .args(["commit", "demo", "-m", "snapshot"])
        .assert()
        .success()
        .stdout("Committed in space 'demo'\n");

    env.cmd()
        .args(["status", "demo"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn commit_json_document() {
    let env = Env::new();
    let demo = env.initialized_space("demo");

    env.cmd()
        .args([
            "commit",
            "demo",
            "-m",
            "settings",
            "settings.json",
            "--content-json",
            r#"{"debug": true}"#,
        ])
        .assert()
        .success();

    assert_eq!(read(&demo.join("settings.json")), "{\n  \"debug\": true\n}\n");
}

#[test]
fn commit_invalid_json_fails() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["commit", "demo", "-m", "m", "x.json", "--content-json", "{nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --content-json"));
}

#[test]
fn missing_file_without_content_reports_code() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["commit", "demo", "-m", "m", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[FILE_MISSING]"))
        .stderr(predicate::str::contains("file: \"a.txt\""))
        .stderr(predicate::str::contains("space: \"demo\""));
}

#[test]
fn unknown_space_reports_code() {
    let env = Env::new();

    env.cmd()
        .args(["push", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[SPACE_NOT_FOUND]"));
}

#[test]
fn json_errors_go_to_stdout() {
    let env = Env::new();

    env.cmd()
        .args(["pull", "missing", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\": \"SPACE_NOT_FOUND\""))
        .stdout(predicate::str::contains("\"space\": \"missing\""));
}

#[test]
fn checkout_dry_run_prints_action() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["checkout", "demo", "feature", "-b", "--dry-run"])
        .assert()
        .success()
        .stdout("[dry-run] space 'demo':\n  would checkout branch 'feature' (create=true)\n");
}

#[test]
fn checkout_creates_branch() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["checkout", "demo", "feature", "-b"])
        .assert()
        .success()
        .stdout("Switched to branch 'feature' in space 'demo'\n");

    env.cmd()
        .args(["status", "demo", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch feature"));
}

#[test]
fn revert_discards_edits() {
    let env = Env::new();
    let demo = env.initialized_space("demo");
    fs::write(demo.join("README.md"), "scribbles\n").unwrap();

    env.cmd()
        .args(["revert", "demo", "README.md"])
        .assert()
        .success()
        .stdout("Reverted in space 'demo'\n");

    assert_eq!(read(&demo.join("README.md")), "# hi\n");
}

#[test]
fn revert_missing_paths_lists_them() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["revert", "demo", "README.md", "x.txt", "y.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[PATH_NOT_FOUND]"))
        .stderr(predicate::str::contains(r#"missing_files: ["x.txt","y.txt"]"#));
}

#[test]
fn revert_dry_run_json() {
    let env = Env::new();
    env.initialized_space("demo");

    env.cmd()
        .args(["revert", "demo", "README.md", "--from", "main", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"simulated\""))
        .stdout(predicate::str::contains(
            "would restore: README.md from branch 'main'",
        ));
}

#[test]
fn quiet_suppresses_success_output() {
    let env = Env::new();
    env.space("demo");

    env.cmd()
        .args(["init", "demo", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn config_shows_effective_values() {
    let env = Env::new();

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# loaded from"))
        .stdout(predicate::str::contains("user_name = \"Test User\""));
}

#[test]
fn explicit_missing_config_fails() {
    Command::cargo_bin("spacegit")
        .unwrap()
        .args(["--config", "/nonexistent/spacegit.toml", "spaces"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
