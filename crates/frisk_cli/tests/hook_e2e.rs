//! End-to-end tests for the `frisk hook` command.

#![expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn frisk() -> Command {
    Command::new(env!("CARGO_BIN_EXE_frisk"))
}

fn init_git_repo(dir: &TempDir) {
    fs::create_dir_all(dir.path().join(".git/hooks")).expect("creating .git layout");
}

#[test]
fn install_requires_git_repo() {
    let dir = TempDir::new().unwrap();

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .code(2);
}

#[test]
#[cfg(unix)]
fn install_creates_executable_pre_commit() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .success();

    let hook_path = dir.path().join(".git/hooks/pre-commit");
    assert!(hook_path.exists());

    let content = fs::read_to_string(&hook_path).unwrap();
    assert!(content.contains("frisk scan"));

    let metadata = fs::metadata(&hook_path).unwrap();
    let permissions = metadata.permissions();
    assert!(permissions.mode() & 0o111 != 0, "hook should be executable");
}

#[test]
fn install_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .success();

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join(".git/hooks/pre-commit").exists());
}

#[test]
fn install_refuses_to_overwrite_external_hook() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);
    fs::write(
        dir.path().join(".git/hooks/pre-commit"),
        "#!/bin/sh\nmake lint\n",
    )
    .unwrap();

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .code(2);

    let content = fs::read_to_string(dir.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(content.contains("make lint"), "external hook must be untouched");
}

#[test]
fn uninstall_removes_managed_hook() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);

    frisk()
        .args(["hook", "install"])
        .current_dir(dir.path())
        .assert()
        .success();

    frisk()
        .args(["hook", "uninstall"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.path().join(".git/hooks/pre-commit").exists());
}

#[test]
fn uninstall_refuses_external_hook() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);
    fs::write(
        dir.path().join(".git/hooks/pre-commit"),
        "#!/bin/sh\nmake lint\n",
    )
    .unwrap();

    frisk()
        .args(["hook", "uninstall"])
        .current_dir(dir.path())
        .assert()
        .code(2);

    assert!(dir.path().join(".git/hooks/pre-commit").exists());
}

#[test]
fn uninstall_with_no_hook_succeeds() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);

    frisk()
        .args(["hook", "uninstall"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn status_without_hook_suggests_install() {
    let dir = TempDir::new().unwrap();
    init_git_repo(&dir);

    frisk()
        .arg("hook")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("no hook installed"));
}
