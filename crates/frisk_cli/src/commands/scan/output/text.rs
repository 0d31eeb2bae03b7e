//! Human-readable text formatter for scan results.

use std::io::Write;
use std::path::Path;

use frisk_core::prelude::*;

use super::display_path;
use crate::ui::{colors, indicators, pluralise_word};

/// Writes the findings report as styled text to the given writer.
pub fn write(results: &[ScanResult], root: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    if results.is_empty() {
        writeln!(
            writer,
            "{} {}",
            colors::success().apply_to(indicators::SUCCESS),
            colors::secondary().apply_to("no secrets found")
        )?;
        return Ok(());
    }

    for result in results {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            colors::primary().apply_to(display_path(&result.path, root).display())
        )?;

        for finding in &result.findings {
            writeln!(
                writer,
                "  {} ({}): {}",
                colors::line_number().apply_to(format!("line {}", finding.line_number)),
                colors::accent().apply_to(finding.kinds_joined()),
                colors::code().apply_to(&finding.masked_line)
            )?;
        }
    }

    let total = ScanResult::total_findings(results);
    writeln!(writer)?;
    writeln!(
        writer,
        "{} {} potential {} found",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(total),
        colors::muted().apply_to(pluralise_word(total, "secret", "secrets"))
    )?;

    Ok(())
}
