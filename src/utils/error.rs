use crate::domain::model::VerifierPair;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("CPF must contain 11 digits, found {found}")]
    WrongLength { found: usize },

    #[error("CPF cannot be a run of a single repeated digit")]
    RepeatedDigits,

    #[error("verifier digits do not match: supplied {supplied}, expected {expected}")]
    ChecksumMismatch {
        supplied: VerifierPair,
        expected: VerifierPair,
    },

    #[error("invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CpfError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Checksum,
    Config,
    Io,
    Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CpfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WrongLength { .. } | Self::RepeatedDigits => ErrorCategory::Format,
            Self::ChecksumMismatch { .. } => ErrorCategory::Checksum,
            Self::InvalidConfigValue { .. } => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::Io,
            Self::Serialization(_) => ErrorCategory::Encoding,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongLength { .. } | Self::RepeatedDigits | Self::ChecksumMismatch { .. } => {
                ErrorSeverity::Medium
            }
            Self::InvalidConfigValue { .. } | Self::Serialization(_) => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => {
                "Enter exactly 11 digits; punctuation and spaces are stripped automatically"
            }
            Self::RepeatedDigits => {
                "A CPF is never one digit repeated 11 times; check for typos"
            }
            Self::ChecksumMismatch { .. } => {
                "Re-check the last two digits; they must match the computed verifier digits"
            }
            Self::InvalidConfigValue { .. } => {
                "Adjust the flag or profile value and run the command again"
            }
            Self::Io(_) => "Check that the terminal or file is readable and try again",
            Self::Serialization(_) => "Retry without --json or report the issue",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::WrongLength { found } => {
                format!("The CPF must have 11 digits; {} were entered.", found)
            }
            Self::RepeatedDigits => {
                "The CPF is a sequence of identical digits, which is never issued.".to_string()
            }
            Self::ChecksumMismatch { supplied, expected } => format!(
                "The verifier digits are wrong: you entered {}, the correct pair is {}.",
                supplied, expected
            ),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration problem with '{}': {}.", field, reason)
            }
            Self::Io(e) => format!("Could not read or write: {}.", e),
            Self::Serialization(e) => format!("Could not encode the report: {}.", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_drives_exit_codes() {
        let err = CpfError::WrongLength { found: 10 };
        assert_eq!(err.category(), ErrorCategory::Format);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = CpfError::ChecksumMismatch {
            supplied: VerifierPair { first: 4, second: 8 },
            expected: VerifierPair { first: 4, second: 7 },
        };
        assert_eq!(err.category(), ErrorCategory::Checksum);
        assert!(err.user_friendly_message().contains("47"));
        assert!(err.user_friendly_message().contains("48"));
    }
}
