use thiserror::Error;

use crate::pattern::SecretKind;

/// Errors that can occur when compiling a secret detection pattern.
///
/// Pattern compilation happens once at startup; a failure here is a
/// programmer error in the built-in table, never a per-file condition.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern's regular expression failed to compile.
    #[error("invalid regex for pattern '{kind}': {source}")]
    InvalidRegex {
        /// Kind of the pattern that failed (e.g. "AWS Access Key").
        kind: SecretKind,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}
