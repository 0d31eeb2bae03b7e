//! Ignore-rule loading and path exclusion.
//!
//! Rules come from a `.gitignore`-style file at the scan root: one glob per
//! non-blank, non-comment line. A trailing `/` marks a directory rule and
//! expands to the directory itself plus everything beneath it. There is no
//! negation (`!pattern`) support; that simplification is deliberate.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
#[cfg(feature = "tracing")]
use tracing::debug;

/// Name of the ignore file read from the scan root.
pub const IGNORE_FILENAME: &str = ".gitignore";

/// Compiled exclusion rules for one scan root.
///
/// The same matcher is used for directories (to prune traversal) and files
/// (to skip scanning). Loading fails soft: a missing or unreadable ignore
/// file, or an individual invalid glob, only means fewer rules.
pub struct IgnoreRules {
    root: PathBuf,
    set: GlobSet,
    rule_count: usize,
}

impl std::fmt::Debug for IgnoreRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IgnoreRules")
            .field("root", &self.root)
            .field("rules", &self.rule_count)
            .finish_non_exhaustive()
    }
}

impl IgnoreRules {
    /// Loads rules from the ignore file at `root`, or returns an empty rule
    /// set if the file is missing or unreadable.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let content = std::fs::read_to_string(root.join(IGNORE_FILENAME)).unwrap_or_default();
        Self::parse(root, &content)
    }

    /// Parses rules from already-read ignore file content.
    #[must_use]
    pub fn parse(root: &Path, content: &str) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut rule_count = 0;

        for line in content.lines() {
            let rule = line.trim();
            if rule.is_empty() || rule.starts_with('#') {
                continue;
            }
            if compile_rule(&mut builder, rule) {
                rule_count += 1;
            }
        }

        let set = builder.build().unwrap_or_else(|_| GlobSet::empty());

        Self {
            root: root.to_path_buf(),
            set,
            rule_count,
        }
    }

    /// Returns `true` if `path` is excluded by any rule.
    ///
    /// `path` is matched relative to the scan root; paths outside the root
    /// are matched as given.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.set.is_match(relative)
    }

    /// Number of rules that compiled successfully.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rule_count
    }

    /// Returns `true` if no rules are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }
}

/// Compiles one ignore rule into the set, returning `false` for globs that
/// fail to compile (they are treated as non-matching, never an error).
fn compile_rule(builder: &mut GlobSetBuilder, rule: &str) -> bool {
    // Rules match right-anchored against path components: `build` excludes
    // a `build` component at any depth, but not `builder`.
    let globs: Vec<String> = if let Some(dir) = rule.strip_suffix('/') {
        vec![format!("**/{dir}"), format!("**/{dir}/**")]
    } else {
        vec![format!("**/{rule}")]
    };

    for pattern in &globs {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(_error) => {
                #[cfg(feature = "tracing")]
                debug!(rule, error = %_error, "skipping invalid ignore rule");
                return false;
            }
        }
    }

    true
}
