//! Shared CLI error type and exit codes.

use std::fmt;

/// Process exit codes used by headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Reading or writing files failed
    Io = 1,
    /// Input was understood but rejected
    Validation = 2,
    /// Arguments could not be interpreted
    Usage = 3,
}

impl ExitCode {
    /// Numeric code handed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Kind of CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File system or serialization failure
    Io,
    /// Rejected input or output that failed to render
    Validation,
    /// Malformed arguments
    Usage,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// What went wrong
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Bad arguments.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io => ExitCode::Io,
            CliErrorKind::Validation => ExitCode::Validation,
            CliErrorKind::Usage => ExitCode::Usage,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::io("x").exit_code().code(), 1);
        assert_eq!(CliError::validation("x").exit_code().code(), 2);
        assert_eq!(CliError::usage("x").exit_code().code(), 3);
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(CliError::usage("bad flag").to_string(), "bad flag");
    }
}
