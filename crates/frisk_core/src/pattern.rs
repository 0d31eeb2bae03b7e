//! Pattern definitions and registry for secret detection.

use std::fmt;

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::Serialize;

use crate::error::PatternError;

/// Token substituted for a captured secret span inside an assignment.
pub const REDACTION_TOKEN: &str = "***REDACTED***";

/// The kind of secret a pattern detects.
///
/// Definition order here is the registry order: patterns are applied to a
/// line in this order, and it decides which kind is reported first when
/// several patterns match overlapping text. The order is the original
/// table order and must stay stable for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecretKind {
    /// `api_key = <value>` assignments with a long token value.
    #[serde(rename = "API Key")]
    ApiKey,
    /// `password = <value>` assignments. Deliberately broad; see the
    /// registry notes on false positives.
    #[serde(rename = "Password")]
    Password,
    /// PEM private key headers.
    #[serde(rename = "Private Key")]
    PrivateKey,
    /// GitHub personal access tokens (`ghp_` prefix).
    #[serde(rename = "GitHub Token")]
    GithubToken,
    /// AWS access key IDs (`AKIA` prefix).
    #[serde(rename = "AWS Access Key")]
    AwsAccessKey,
    /// Standalone 40-character base64-alphabet runs.
    #[serde(rename = "AWS Secret Key")]
    AwsSecretKey,
}

impl SecretKind {
    /// All kinds in registry order.
    pub const ALL: [Self; 6] = [
        Self::ApiKey,
        Self::Password,
        Self::PrivateKey,
        Self::GithubToken,
        Self::AwsAccessKey,
        Self::AwsSecretKey,
    ];

    /// Human-readable label used in reports (e.g. `"AWS Access Key"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ApiKey => "API Key",
            Self::Password => "Password",
            Self::PrivateKey => "Private Key",
            Self::GithubToken => "GitHub Token",
            Self::AwsAccessKey => "AWS Access Key",
            Self::AwsSecretKey => "AWS Secret Key",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a matched secret is rewritten in the reported line.
#[derive(Debug, Clone, Copy)]
pub enum Redaction {
    /// Replacement template expanded with capture groups, so the key name
    /// and quoting around the secret survive masking.
    Template(&'static str),
    /// Fixed token replacing the entire match.
    Token(&'static str),
    /// Fixed token replacing maximal matches whose byte length is exactly
    /// `len`; longer runs are left untouched.
    ExactLength {
        /// Required match length in bytes.
        len: usize,
        /// Replacement token.
        token: &'static str,
    },
}

struct PatternDef {
    kind: SecretKind,
    regex: &'static str,
    redaction: Redaction,
    keywords: &'static [&'static str],
}

// The regex crate has no lookbehind/lookahead, so the AWS secret key's
// "not adjacent to base64 characters" boundary is expressed as a greedy
// `{40,}` repetition: every match is then a maximal run, and only runs of
// exactly 40 bytes qualify.
static BUILTIN: &[PatternDef] = &[
    PatternDef {
        kind: SecretKind::ApiKey,
        regex: r#"(?i)(?P<head>['"]?api_key['"]?\s*[:=]\s*['"]?)(?P<secret>[a-zA-Z0-9\-_]{20,})(?P<tail>['"]?)"#,
        redaction: Redaction::Template("${head}***REDACTED***${tail}"),
        keywords: &["api_key"],
    },
    PatternDef {
        kind: SecretKind::Password,
        regex: r#"(?i)(?P<head>['"]?password['"]?\s*[:=]\s*['"]?)(?P<secret>.{8,})(?P<tail>['"]?)"#,
        redaction: Redaction::Template("${head}***REDACTED***${tail}"),
        keywords: &["password"],
    },
    PatternDef {
        kind: SecretKind::PrivateKey,
        regex: r"-----BEGIN [A-Z]+ PRIVATE KEY-----",
        redaction: Redaction::Token("***REDACTED PRIVATE KEY***"),
        keywords: &["private key"],
    },
    PatternDef {
        kind: SecretKind::GithubToken,
        regex: r"ghp_[a-zA-Z0-9]{36}",
        redaction: Redaction::Token("***REDACTED GITHUB TOKEN***"),
        keywords: &["ghp_"],
    },
    PatternDef {
        kind: SecretKind::AwsAccessKey,
        regex: r"AKIA[0-9A-Z]{16}",
        redaction: Redaction::Token("***REDACTED AWS ACCESS KEY***"),
        keywords: &["akia"],
    },
    PatternDef {
        kind: SecretKind::AwsSecretKey,
        regex: r"[A-Za-z0-9/+=]{40,}",
        redaction: Redaction::ExactLength {
            len: 40,
            token: "***REDACTED AWS SECRET KEY***",
        },
        keywords: &[],
    },
];

/// A compiled secret detection pattern ready for scanning.
#[derive(Debug)]
pub struct PatternEntry {
    /// Kind reported when this pattern matches.
    pub kind: SecretKind,
    /// Compiled regular expression that matches the secret.
    pub regex: Regex,
    /// How matches are rewritten in the masked line.
    pub redaction: Redaction,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If
    /// non-empty, the pattern is only tested against lines containing at
    /// least one keyword.
    pub keywords: &'static [&'static str],
}

impl PatternEntry {
    fn from_def(def: &PatternDef) -> Result<Self, PatternError> {
        let regex = Regex::new(def.regex).map_err(|source| PatternError::InvalidRegex {
            kind: def.kind,
            source,
        })?;

        Ok(Self {
            kind: def.kind,
            regex,
            redaction: def.redaction,
            keywords: def.keywords,
        })
    }
}

/// Ordered collection of patterns with Aho-Corasick keyword pre-filtering.
///
/// The registry builds a keyword automaton at construction time so that the
/// scanner can cheaply skip patterns whose keywords are absent from a line.
pub struct PatternRegistry {
    entries: Vec<PatternEntry>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_entries: Vec<Vec<usize>>,
    entries_without_keywords: Vec<usize>,
}

impl fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl PatternRegistry {
    /// Compiles the built-in pattern table.
    pub fn builtin() -> Result<Self, PatternError> {
        let entries = BUILTIN
            .iter()
            .map(PatternEntry::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    fn new(entries: Vec<PatternEntry>) -> Self {
        let index = build_keyword_index(&entries);
        let keyword_automaton = build_automaton(&index.keywords);

        Self {
            entries,
            keyword_automaton,
            keyword_to_entries: index.keyword_to_entries,
            entries_without_keywords: index.entries_without_keywords,
        }
    }

    /// Returns all patterns in registry order.
    #[must_use]
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Returns the number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    pub(crate) fn keyword_to_entries(&self) -> &[Vec<usize>] {
        &self.keyword_to_entries
    }

    pub(crate) fn entries_without_keywords(&self) -> &[usize] {
        &self.entries_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_entries: Vec<Vec<usize>>,
    entries_without_keywords: Vec<usize>,
}

fn build_keyword_index(entries: &[PatternEntry]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_entries: Vec<Vec<usize>> = Vec::new();
    let mut entries_without_keywords = Vec::new();

    for (entry_idx, entry) in entries.iter().enumerate() {
        if entry.keywords.is_empty() {
            entries_without_keywords.push(entry_idx);
            continue;
        }

        for &keyword in entry.keywords {
            if let Some(pos) = keywords.iter().position(|k| k == keyword) {
                keyword_to_entries[pos].push(entry_idx);
            } else {
                keywords.push(keyword.to_owned());
                keyword_to_entries.push(vec![entry_idx]);
            }
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_entries,
        entries_without_keywords,
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_compiles_all_six_patterns() {
        let registry = PatternRegistry::builtin().unwrap();
        assert_eq!(registry.len(), SecretKind::ALL.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn builtin_preserves_definition_order() {
        let registry = PatternRegistry::builtin().unwrap();
        let kinds: Vec<SecretKind> = registry.entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, SecretKind::ALL);
    }

    #[test]
    fn kind_labels_match_report_wording() {
        assert_eq!(SecretKind::ApiKey.label(), "API Key");
        assert_eq!(SecretKind::Password.label(), "Password");
        assert_eq!(SecretKind::PrivateKey.label(), "Private Key");
        assert_eq!(SecretKind::GithubToken.label(), "GitHub Token");
        assert_eq!(SecretKind::AwsAccessKey.label(), "AWS Access Key");
        assert_eq!(SecretKind::AwsSecretKey.label(), "AWS Secret Key");
    }

    #[test]
    fn kind_display_uses_label() {
        assert_eq!(format!("{}", SecretKind::GithubToken), "GitHub Token");
    }

    #[test]
    fn registry_builds_keyword_automaton() {
        let registry = PatternRegistry::builtin().unwrap();
        assert!(registry.keyword_automaton().is_some());
    }

    #[test]
    fn aws_secret_key_runs_without_keyword_gate() {
        let registry = PatternRegistry::builtin().unwrap();
        let without = registry.entries_without_keywords();
        assert_eq!(without.len(), 1);
        assert_eq!(registry.entries()[without[0]].kind, SecretKind::AwsSecretKey);
    }

    #[test]
    fn keyword_index_maps_each_keyword_to_its_entry() {
        let registry = PatternRegistry::builtin().unwrap();
        for mapped in registry.keyword_to_entries() {
            assert_eq!(mapped.len(), 1);
        }
    }

    #[test]
    fn redaction_tokens_do_not_match_any_pattern() {
        let registry = PatternRegistry::builtin().unwrap();
        let tokens = [
            REDACTION_TOKEN,
            "***REDACTED PRIVATE KEY***",
            "***REDACTED GITHUB TOKEN***",
            "***REDACTED AWS ACCESS KEY***",
            "***REDACTED AWS SECRET KEY***",
        ];

        for token in tokens {
            for entry in registry.entries() {
                assert!(
                    !entry.regex.is_match(token),
                    "token {token:?} matches pattern {}",
                    entry.kind
                );
            }
        }
    }

    #[test]
    fn debug_impl_shows_entry_count() {
        let registry = PatternRegistry::builtin().unwrap();
        let debug = format!("{registry:?}");
        assert!(debug.contains("PatternRegistry"));
        assert!(debug.contains("entries"));
    }
}
