//! Hook command - installs and manages the git pre-commit hook.

use std::path::Path;

use anyhow::Context as _;

use crate::HookCommand;
use crate::ui::{colors, exit, indicators, print_command_header, print_hint, print_info};

/// Path to the git hooks directory.
const GIT_HOOKS_DIR: &str = ".git/hooks";
/// Path to the git pre-commit hook file.
const PRECOMMIT_HOOK_PATH: &str = ".git/hooks/pre-commit";
/// Marker comment identifying hooks managed by frisk.
const HOOK_MARKER: &str = "# frisk-managed";

/// Shell script for the frisk-managed pre-commit hook. The hook's exit
/// code is the scan's exit code, so findings block the commit.
const HOOK_SCRIPT: &str = r"#!/bin/sh
# frisk-managed
exec frisk scan
";

/// Executes the `frisk hook` command, showing status or
/// installing/uninstalling the git pre-commit hook.
pub fn run(command: Option<&HookCommand>) -> super::Result {
    let hook_path = Path::new(PRECOMMIT_HOOK_PATH);

    match command {
        Some(HookCommand::Install) => install(hook_path),
        Some(HookCommand::Uninstall) => uninstall(hook_path),
        None => {
            show_status(hook_path);
            Ok(())
        }
    }
}

fn show_status(hook_path: &Path) {
    print_command_header("hook");

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            println!(
                "{} {}",
                colors::muted().apply_to("○"),
                colors::secondary().apply_to("no hook installed")
            );
            println!();
            print_hint("frisk hook install", "Install pre-commit hook");
        }
        HookStatus::Managed => {
            println!(
                "{} {}",
                colors::success().apply_to(indicators::SUCCESS),
                colors::secondary().apply_to("pre-commit installed")
            );
            println!();
            print_hint("frisk hook uninstall", "Remove hook");
        }
        HookStatus::External => {
            println!(
                "{} {}",
                colors::warning().apply_to(indicators::WARNING),
                colors::secondary().apply_to("external hook (not managed by frisk)")
            );
            println!();
            print_info("Add to your pre-commit hook: `frisk scan`");
        }
    }
}

fn install(hook_path: &Path) -> super::Result {
    print_command_header("hook install");

    verify_git_repository();

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            write_hook(hook_path)?;
            print_created(hook_path);
        }
        HookStatus::Managed => {
            print_already_installed();
        }
        HookStatus::External => {
            external_hook_error();
        }
    }

    Ok(())
}

fn uninstall(hook_path: &Path) -> super::Result {
    print_command_header("hook uninstall");

    match check_hook_status(hook_path) {
        HookStatus::NotExists => {
            print_no_hook();
        }
        HookStatus::Managed => {
            std::fs::remove_file(hook_path).context("removing hook")?;
            print_removed(hook_path);
        }
        HookStatus::External => {
            not_managed_error();
        }
    }

    Ok(())
}

fn verify_git_repository() {
    if Path::new(".git").is_dir() {
        return;
    }

    println!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("not a git repository")
    );
    std::process::exit(exit::ERROR)
}

fn write_hook(hook_path: &Path) -> anyhow::Result<()> {
    let hooks_dir = Path::new(GIT_HOOKS_DIR);
    if !hooks_dir.exists() {
        std::fs::create_dir_all(hooks_dir).context("creating hooks directory")?;
    }

    std::fs::write(hook_path, HOOK_SCRIPT).context("writing hook")?;
    make_executable(hook_path)?;

    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)?;

    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}

fn print_created(hook_path: &Path) {
    println!(
        "{} {}",
        colors::success().apply_to(indicators::ADDED),
        colors::emphasis().apply_to(hook_path.display())
    );
}

fn print_already_installed() {
    println!(
        "{} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to("pre-commit already installed")
    );
}

fn external_hook_error() -> ! {
    println!(
        "{} {} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("external hook exists at"),
        colors::emphasis().apply_to(PRECOMMIT_HOOK_PATH)
    );
    println!();
    println!(
        "  {} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to("Add to your existing hook: `frisk scan`")
    );
    println!(
        "  {} {}",
        colors::info().apply_to(indicators::INFO),
        colors::secondary().apply_to("Or remove it first to let frisk manage the hook")
    );

    std::process::exit(exit::ERROR)
}

fn print_no_hook() {
    println!(
        "{} {}",
        colors::muted().apply_to("○"),
        colors::secondary().apply_to("no hook installed")
    );
}

fn print_removed(hook_path: &Path) {
    println!(
        "{} {} {}",
        colors::success().apply_to(indicators::SUCCESS),
        colors::secondary().apply_to("removed"),
        colors::emphasis().apply_to(hook_path.display())
    );
}

fn not_managed_error() -> ! {
    println!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to("hook not managed by frisk")
    );

    std::process::exit(exit::ERROR)
}

enum HookStatus {
    NotExists,
    Managed,
    External,
}

fn check_hook_status(hook_path: &Path) -> HookStatus {
    if !hook_path.exists() {
        return HookStatus::NotExists;
    }

    let content = std::fs::read_to_string(hook_path).unwrap_or_default();

    if content.contains(HOOK_MARKER) {
        HookStatus::Managed
    } else {
        HookStatus::External
    }
}
