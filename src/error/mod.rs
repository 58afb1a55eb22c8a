//! Error types and handling for botcfg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`parse`]: Configuration parse errors and their kinds
//! - [`fs`]: File system errors

pub mod fs;
pub mod parse;

pub use fs::read_failed as file_read_failed;
pub use parse::ParseErrorKind;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for botcfg operations
#[derive(Error, Diagnostic, Debug)]
pub enum BotcfgError {
    // Parse errors
    #[error("{path}: no section [{section}]")]
    #[diagnostic(
        code(botcfg::parse::missing_section),
        help("Bot configs need a [Locations] section")
    )]
    MissingSection { path: String, section: String },

    #[error("{path}:{line}: file contains no section headers")]
    #[diagnostic(
        code(botcfg::parse::missing_section_header),
        help("Start the file with a section header such as [Locations]")
    )]
    MissingSectionHeader { path: String, line: usize },

    #[error("{path}: no option '{option}' in section [{section}]")]
    #[diagnostic(code(botcfg::parse::missing_option))]
    MissingOption {
        path: String,
        section: String,
        option: String,
    },

    #[error("{path}: invalid value for '{option}' in [{section}]: {reason}")]
    #[diagnostic(code(botcfg::parse::invalid_value))]
    InvalidValue {
        path: String,
        section: String,
        option: String,
        reason: String,
    },

    #[error("{path}:{line}: malformed line: {content}")]
    #[diagnostic(
        code(botcfg::parse::malformed_line),
        help("Options use 'key = value' or 'key: value'")
    )]
    MalformedLine {
        path: String,
        line: usize,
        content: String,
    },

    #[error("{path}:{line}: section [{section}] already exists")]
    #[diagnostic(code(botcfg::parse::duplicate_section))]
    DuplicateSection {
        path: String,
        line: usize,
        section: String,
    },

    #[error("{path}:{line}: option '{option}' in section [{section}] already exists")]
    #[diagnostic(code(botcfg::parse::duplicate_option))]
    DuplicateOption {
        path: String,
        line: usize,
        section: String,
        option: String,
    },

    // Scan errors
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(botcfg::scan::invalid_pattern),
        help("Patterns are matched against paths relative to the scan root, e.g. **/*.cfg")
    )]
    InvalidPattern { pattern: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(botcfg::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(botcfg::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(botcfg::fs::io_error))]
    IoError { message: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(botcfg::output::serialize_failed))]
    SerializeFailed { message: String },
}

impl BotcfgError {
    /// The parse error kind, if this error came from parsing a config
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            BotcfgError::MissingSection { .. } => Some(ParseErrorKind::MissingSection),
            BotcfgError::MissingSectionHeader { .. } => Some(ParseErrorKind::MissingSectionHeader),
            BotcfgError::MissingOption { .. } => Some(ParseErrorKind::MissingOption),
            BotcfgError::InvalidValue { .. } => Some(ParseErrorKind::InvalidValue),
            BotcfgError::MalformedLine { .. } => Some(ParseErrorKind::MalformedLine),
            BotcfgError::DuplicateSection { .. } => Some(ParseErrorKind::DuplicateSection),
            BotcfgError::DuplicateOption { .. } => Some(ParseErrorKind::DuplicateOption),
            _ => None,
        }
    }

    /// Whether a scan may skip the offending file and carry on
    pub fn is_recoverable(&self) -> bool {
        self.parse_kind()
            .is_some_and(|kind| kind.is_recoverable())
    }
}

impl From<std::io::Error> for BotcfgError {
    fn from(err: std::io::Error) -> Self {
        BotcfgError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BotcfgError {
    fn from(err: serde_yaml::Error) -> Self {
        BotcfgError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BotcfgError {
    fn from(err: serde_json::Error) -> Self {
        BotcfgError::SerializeFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BotcfgError>;
