//! Commit decision policy.
//!
//! Once a scan has run, exactly one decision is made: let the commit
//! proceed or abort it. The policy never re-runs the scan and never
//! consults anything beyond the inputs it is given.

/// The verdict for a completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The commit may proceed.
    Continue,
    /// The commit is blocked.
    Abort,
}

impl Outcome {
    /// Process exit code for this outcome: `0` to proceed, `1` to block.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Continue => 0,
            Self::Abort => 1,
        }
    }
}

/// Decides the outcome for a scan.
///
/// With no findings the commit always proceeds. Force mode overrides any
/// findings. Otherwise, an interactive session gets exactly one
/// confirmation prompt via `confirm`; a trimmed, case-insensitive `y`
/// continues, anything else (including end-of-input, `None`) aborts.
/// Non-interactive sessions with findings always abort.
pub fn decide<F>(has_findings: bool, force: bool, interactive: bool, confirm: F) -> Outcome
where
    F: FnOnce() -> Option<String>,
{
    if !has_findings || force {
        return Outcome::Continue;
    }

    if !interactive {
        return Outcome::Abort;
    }

    match confirm() {
        Some(answer) if answer.trim().eq_ignore_ascii_case("y") => Outcome::Continue,
        _ => Outcome::Abort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_prompted() -> Option<String> {
        panic!("confirmation must not be requested");
    }

    #[test]
    fn clean_scan_continues_without_prompting() {
        assert_eq!(decide(false, false, true, never_prompted), Outcome::Continue);
        assert_eq!(decide(false, false, false, never_prompted), Outcome::Continue);
    }

    #[test]
    fn force_overrides_findings_without_prompting() {
        assert_eq!(decide(true, true, true, never_prompted), Outcome::Continue);
        assert_eq!(decide(true, true, false, never_prompted), Outcome::Continue);
    }

    #[test]
    fn findings_without_terminal_abort() {
        assert_eq!(decide(true, false, false, never_prompted), Outcome::Abort);
    }

    #[test]
    fn interactive_yes_continues() {
        assert_eq!(
            decide(true, false, true, || Some("y".to_owned())),
            Outcome::Continue
        );
    }

    #[test]
    fn interactive_yes_is_trimmed_and_case_insensitive() {
        assert_eq!(
            decide(true, false, true, || Some("  Y \n".to_owned())),
            Outcome::Continue
        );
    }

    #[test]
    fn interactive_anything_else_aborts() {
        for answer in ["n", "yes", "no", "", "  ", "q"] {
            assert_eq!(
                decide(true, false, true, || Some(answer.to_owned())),
                Outcome::Abort,
                "answer {answer:?} must abort"
            );
        }
    }

    #[test]
    fn interactive_end_of_input_aborts() {
        assert_eq!(decide(true, false, true, || None), Outcome::Abort);
    }

    #[test]
    fn exit_codes_map_to_shell_convention() {
        assert_eq!(Outcome::Continue.exit_code(), 0);
        assert_eq!(Outcome::Abort.exit_code(), 1);
    }
}
