//! # Commands
//!
//! - `frisk scan` - Scan a directory for secrets and decide the commit
//! - `frisk hook` - Manage the git pre-commit hook

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/frisk-sh/frisk";

#[derive(Debug, Parser)]
#[command(
    name = "frisk",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    Hook {
        #[command(subcommand)]
        command: Option<HookCommand>,
    },
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Arguments for the `frisk scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Directory to scan for secrets.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Report findings but never block the commit (always exit 0).
    #[arg(short, long)]
    pub force: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Subcommands for `frisk hook`.
#[derive(Debug, Subcommand)]
pub enum HookCommand {
    /// Install a git pre-commit hook.
    Install,
    /// Uninstall the git pre-commit hook.
    Uninstall,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Hook { command } => commands::hook::run(command.as_ref()),
    }
}

fn build_about() -> String {
    format!(
        r"
  {} scans your working tree for hardcoded secrets before they
  reach your repository. API keys, passwords, private keys, and
  cloud tokens are reported with the sensitive part masked.",
        colors::accent().apply_to("frisk").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    frisk scan                     Scan current directory
    frisk scan src/                Scan a specific directory
    frisk scan . --format json     Output as JSON
    frisk scan --force             Report findings but never block
    frisk hook install             Install the pre-commit hook

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
