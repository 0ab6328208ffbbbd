//! Verdicts derived from the checker's exit status.

use std::fmt;

/// Label shown before anything has run.
pub const NO_VERDICT: &str = "[Verdict]";

/// Outcome of one checker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Exit code 0
    Passed,
    /// Non-zero exit code
    Failed(i32),
    /// Terminated without an exit code
    Killed,
}

impl Verdict {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Passed,
            Some(code) => Self::Failed(code),
            None => Self::Killed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Exit code to propagate from the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed(code) => *code,
            Self::Killed => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str(message(0)),
            Self::Failed(code) => write!(f, "({}) {}", code, message(*code)),
            Self::Killed => f.write_str("(signal) Process terminated"),
        }
    }
}

/// Message for a checker exit code. Unknown codes map to an empty string.
///
/// The front-end historically used codes 100-105; the checker itself
/// reports the same conditions as 250-255.
pub fn message(code: i32) -> &'static str {
    match code {
        0 => "Check passed!",
        1 => "Check failed!",
        100 | 250 => "Cannot combine options that require arguments",
        101 | 251 => "Unrecognized option",
        102 | 252 => "Unable to allocate sufficient memory",
        103 | 253 => "Could not open specified file",
        104 | 254 => "Missing argument to a flag",
        105 | 255 => "No options or arguments given to program",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_passes() {
        let verdict = Verdict::from_code(Some(0));
        assert!(verdict.is_success());
        assert_eq!(verdict.to_string(), "Check passed!");
        assert_eq!(verdict.exit_code(), 0);
    }

    #[test]
    fn failure_includes_code_and_message() {
        assert_eq!(Verdict::from_code(Some(1)).to_string(), "(1) Check failed!");
        assert_eq!(
            Verdict::from_code(Some(253)).to_string(),
            "(253) Could not open specified file"
        );
        assert_eq!(
            Verdict::from_code(Some(101)).to_string(),
            "(101) Unrecognized option"
        );
    }

    #[test]
    fn unknown_code_has_empty_message() {
        assert_eq!(message(42), "");
        assert_eq!(Verdict::from_code(Some(42)).to_string(), "(42) ");
    }

    #[test]
    fn missing_code_is_killed() {
        let verdict = Verdict::from_code(None);
        assert_eq!(verdict, Verdict::Killed);
        assert_eq!(verdict.exit_code(), 1);
    }
}
