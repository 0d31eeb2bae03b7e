//! Scan command - scans a directory and decides whether the commit proceeds.

mod output;

use std::io::IsTerminal;

use anyhow::Context as _;
use frisk_core::prelude::*;

use crate::ui::{exit, print_command_header, print_info, print_warning};
use crate::{OutputFormat, ScanArgs};

/// Executes the `frisk scan` command.
pub fn run(args: &ScanArgs) -> super::Result {
    let show_progress = matches!(args.format, OutputFormat::Text);

    if show_progress {
        print_command_header("scan");
        print_info(&format!("scanning {}", args.directory.display()));
    }

    let root = args
        .directory
        .canonicalize()
        .with_context(|| format!("cannot access directory {}", args.directory.display()))?;

    let registry = PatternRegistry::builtin()?;
    let scanner = Scanner::new(registry);
    let rules = IgnoreRules::load(&root);

    let mut walker = Walker::new(&scanner, &rules);
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        walker = walker.exclude_self(resolved);
    }

    let results = walker.walk(&root);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        files = results.len(),
        findings = ScanResult::total_findings(&results),
        "scan complete"
    );

    output::write_report(args.format, &results, &root)?;

    let has_findings = !results.is_empty();
    let interactive = show_progress && std::io::stdin().is_terminal();

    let outcome = decide(has_findings, args.force, interactive, prompt_confirmation);

    if outcome == Outcome::Abort {
        print_warning("aborting: secrets detected");
        std::process::exit(exit::FINDINGS);
    }

    Ok(())
}

/// Asks the user once whether to continue despite findings. Returns `None`
/// when the prompt cannot be read, which the policy treats as a refusal.
fn prompt_confirmation() -> Option<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("secrets detected, continue anyway? [y/N]")
        .allow_empty(true)
        .interact_text()
        .ok()
}
