//! CLI command handlers.

/// Git pre-commit hook installation and management.
pub mod hook;
/// Directory scanning and the commit decision.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
