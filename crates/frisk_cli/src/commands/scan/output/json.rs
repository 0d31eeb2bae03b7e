//! JSON output formatter for scan results.

use std::io::Write;
use std::path::Path;

use frisk_core::prelude::*;
use serde::Serialize;

use super::display_path;

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    line: usize,
    kinds: &'a [SecretKind],
    masked: &'a str,
}

fn to_json_file<'a>(result: &'a ScanResult, root: &Path) -> JsonFile<'a> {
    JsonFile {
        path: display_path(&result.path, root).display().to_string(),
        findings: result
            .findings
            .iter()
            .map(|f| JsonFinding {
                line: f.line_number,
                kinds: &f.kinds,
                masked: &f.masked_line,
            })
            .collect(),
    }
}

/// Serialises the findings as a pretty-printed JSON array to the writer.
pub fn write(results: &[ScanResult], root: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    let files: Vec<JsonFile<'_>> = results.iter().map(|r| to_json_file(r, root)).collect();
    serde_json::to_writer_pretty(&mut *writer, &files)?;
    writeln!(writer)?;
    Ok(())
}
