//! Types representing detected secrets and per-file scan results.

use std::path::PathBuf;

use serde::Serialize;

use crate::pattern::SecretKind;

/// A single offending line: its position, the kinds detected on it, and the
/// masked rendering that is safe to show.
///
/// Created per matching line, immutable, held only for the duration of a
/// report. A line with no matches never produces a `Finding`.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// 1-based line number within the file.
    pub line_number: usize,
    /// Kinds detected on the line, in registry order.
    pub kinds: Vec<SecretKind>,
    /// The trimmed line text with every detected secret span replaced by a
    /// redaction token. Never contains the original secret substring.
    pub masked_line: Box<str>,
}

impl Finding {
    /// Comma-joined kind labels, e.g. `"API Key, AWS Secret Key"`.
    #[must_use]
    pub fn kinds_joined(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// All findings for one file, in line order.
///
/// Only files with at least one finding contribute a `ScanResult`; the
/// aggregate across a scan is ordered by traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Findings in ascending line order.
    pub findings: Vec<Finding>,
}

impl ScanResult {
    /// Total number of findings across a slice of results.
    #[must_use]
    pub fn total_findings(results: &[Self]) -> usize {
        results.iter().map(|r| r.findings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_joined_uses_comma_and_space() {
        let finding = Finding {
            line_number: 3,
            kinds: vec![SecretKind::ApiKey, SecretKind::AwsSecretKey],
            masked_line: "api_key = \"***REDACTED***\"".into(),
        };
        assert_eq!(finding.kinds_joined(), "API Key, AWS Secret Key");
    }

    #[test]
    fn kinds_joined_single_kind_has_no_separator() {
        let finding = Finding {
            line_number: 1,
            kinds: vec![SecretKind::GithubToken],
            masked_line: "***REDACTED GITHUB TOKEN***".into(),
        };
        assert_eq!(finding.kinds_joined(), "GitHub Token");
    }

    #[test]
    fn total_findings_sums_across_results() {
        let finding = Finding {
            line_number: 1,
            kinds: vec![SecretKind::Password],
            masked_line: "password = ***REDACTED***".into(),
        };
        let results = vec![
            ScanResult {
                path: PathBuf::from("a.env"),
                findings: vec![finding.clone(), finding.clone()],
            },
            ScanResult {
                path: PathBuf::from("b.env"),
                findings: vec![finding],
            },
        ];
        assert_eq!(ScanResult::total_findings(&results), 3);
    }

    #[test]
    fn total_findings_is_zero_for_empty_aggregate() {
        assert_eq!(ScanResult::total_findings(&[]), 0);
    }
}
