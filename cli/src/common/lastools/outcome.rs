//! # Run Classification
//!
//! File: cli/src/common/lastools/outcome.rs
//!
//! Turns an `ExecutionResult` into success, warning or error plus the exit
//! code handed back to the host.
//!
//! 64-bit executables report through their return code: 0 is success, 1 is a
//! warning, anything else an error whose code is forwarded. The old 32-bit
//! builds return unreliable codes, so their output is searched for
//! `WARNING:` first and then `ERROR:`; when neither appears the return code
//! decides as usual.
//!
use super::install::Bitness;
use crate::common::process::ExecutionResult;
use crate::common::report::Severity;

/// Exit code used for errors that carry no usable return code.
pub const FALLBACK_ERROR_CODE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Warning,
    Error,
}

impl Outcome {
    /// Severity the captured output is reported with.
    pub fn severity(self) -> Severity {
        match self {
            Outcome::Success => Severity::Message,
            Outcome::Warning => Severity::Warning,
            Outcome::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub outcome: Outcome,
    pub exit_code: i32,
}

pub fn classify(result: &ExecutionResult, bitness: Bitness) -> Classification {
    if bitness == Bitness::Bit32 {
        if result.output.contains("WARNING:") {
            return Classification {
                outcome: Outcome::Warning,
                exit_code: 1,
            };
        }
        if result.output.contains("ERROR:") {
            return Classification {
                outcome: Outcome::Error,
                exit_code: FALLBACK_ERROR_CODE,
            };
        }
    }
    match result.code {
        Some(0) => Classification {
            outcome: Outcome::Success,
            exit_code: 0,
        },
        Some(1) => Classification {
            outcome: Outcome::Warning,
            exit_code: 1,
        },
        Some(code) => Classification {
            outcome: Outcome::Error,
            exit_code: code,
        },
        None => Classification {
            outcome: Outcome::Error,
            exit_code: FALLBACK_ERROR_CODE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(code: Option<i32>, output: &str) -> ExecutionResult {
        ExecutionResult {
            code,
            output: output.to_string(),
        }
    }

    #[test]
    fn test_64_bit_uses_return_code() {
        for output in ["", "ERROR: ignored", "WARNING: ignored"] {
            let c = classify(&result(Some(0), output), Bitness::Bit64);
            assert_eq!(c.outcome, Outcome::Success);
            assert_eq!(c.exit_code, 0);
        }
        let warning = classify(&result(Some(1), ""), Bitness::Bit64);
        assert_eq!((warning.outcome, warning.exit_code), (Outcome::Warning, 1));
        let error = classify(&result(Some(7), ""), Bitness::Bit64);
        assert_eq!((error.outcome, error.exit_code), (Outcome::Error, 7));
        let negative = classify(&result(Some(-1), ""), Bitness::Bit64);
        assert_eq!(negative.outcome, Outcome::Error);
    }

    #[test]
    fn test_signal_is_error() {
        let c = classify(&result(None, ""), Bitness::Bit64);
        assert_eq!((c.outcome, c.exit_code), (Outcome::Error, FALLBACK_ERROR_CODE));
    }

    #[test]
    fn test_32_bit_sniffs_error_regardless_of_code() {
        let c = classify(&result(Some(0), "ERROR: file not found"), Bitness::Bit32);
        assert_eq!((c.outcome, c.exit_code), (Outcome::Error, 3));
    }

    #[test]
    fn test_32_bit_warning_wins_over_error() {
        let c = classify(
            &result(Some(0), "WARNING: odd header\nERROR: file not found"),
            Bitness::Bit32,
        );
        assert_eq!((c.outcome, c.exit_code), (Outcome::Warning, 1));
    }

    #[test]
    fn test_32_bit_clean_output_falls_back_to_code() {
        let ok = classify(&result(Some(0), "done"), Bitness::Bit32);
        assert_eq!(ok.outcome, Outcome::Success);
        let failed = classify(&result(Some(5), "done"), Bitness::Bit32);
        assert_eq!((failed.outcome, failed.exit_code), (Outcome::Error, 5));
    }
}
