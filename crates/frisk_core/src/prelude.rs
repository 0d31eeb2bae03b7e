//! Convenience re-exports of the most commonly used types.

pub use crate::error::PatternError;
pub use crate::finding::{Finding, ScanResult};
pub use crate::ignore::IgnoreRules;
pub use crate::pattern::{PatternRegistry, SecretKind};
pub use crate::policy::{Outcome, decide};
pub use crate::scanner::Scanner;
pub use crate::walker::Walker;
