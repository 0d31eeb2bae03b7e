//! Core secret scanning engine for frisk.
//!
//! This crate detects hardcoded secrets in source trees before they are
//! committed. It is designed to be embedded in the `frisk` CLI and in
//! pre-commit hooks.
//!
//! # Main Types
//!
//! - [`Scanner`] - Runs patterns against content line by line
//! - [`PatternRegistry`] - The built-in patterns with keyword pre-filtering
//! - [`Finding`] - An offending line with its masked rendering
//! - [`Walker`] - Ignore-aware directory traversal
//! - [`Outcome`] - The commit decision derived from a completed scan
//!
//! # Error Handling
//!
//! The library uses [`thiserror`] for the one typed error consumers can
//! match on, [`PatternError`]. Everything on the filesystem side fails
//! soft: unreadable files and directories are skipped, never fatal. The
//! CLI crate (`frisk_cli`) uses `anyhow` for error propagation.

/// Error types for pattern compilation.
pub mod error;
/// Types representing detected secrets and per-file scan results.
pub mod finding;
/// Ignore-rule loading and path exclusion.
pub mod ignore;
/// Pattern definitions and the keyword-indexed registry.
pub mod pattern;
/// Commit decision policy and exit codes.
pub mod policy;
/// Common re-exports for internal use.
pub mod prelude;
/// The line scanner that applies patterns and masks matches.
pub mod scanner;
/// Ignore-aware directory traversal.
pub mod walker;

pub use error::PatternError;
pub use finding::{Finding, ScanResult};
pub use ignore::{IGNORE_FILENAME, IgnoreRules};
pub use pattern::{PatternRegistry, REDACTION_TOKEN, SecretKind};
pub use policy::{Outcome, decide};
pub use scanner::{LineScan, Scanner};
pub use walker::Walker;
