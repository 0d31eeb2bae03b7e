//! Output formatting for scan results.

mod json;
mod text;

use std::path::Path;

use frisk_core::prelude::*;

use crate::OutputFormat;

/// Writes the scan report to stdout in the requested format.
///
/// Paths are displayed relative to the scan root.
pub fn write_report(format: OutputFormat, results: &[ScanResult], root: &Path) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    match format {
        OutputFormat::Text => text::write(results, root, &mut stdout),
        OutputFormat::Json => json::write(results, root, &mut stdout),
    }
}

/// Returns `path` relative to `root`, or unchanged if it is not beneath it.
fn display_path<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
