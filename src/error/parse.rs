//! Configuration parse errors
//!
//! Every parse failure carries a [`ParseErrorKind`] tag. Scans consult the
//! tag to decide whether a file can be skipped or the whole scan must stop.

use serde::Serialize;

use super::BotcfgError;

/// Closed set of parse failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// A required section is absent
    MissingSection,
    /// An option appears before any section header
    MissingSectionHeader,
    /// A required option is absent from its section
    MissingOption,
    /// An option is present but its value has the wrong shape
    InvalidValue,
    /// A line is neither a header, an option, a comment nor a continuation
    MalformedLine,
    /// The same section header appears twice
    DuplicateSection,
    /// The same option appears twice in one section
    DuplicateOption,
}

impl ParseErrorKind {
    /// Kinds that mark a file as "not a bot config" rather than broken
    pub const RECOVERABLE: [ParseErrorKind; 4] = [
        ParseErrorKind::MissingSection,
        ParseErrorKind::MissingSectionHeader,
        ParseErrorKind::MissingOption,
        ParseErrorKind::InvalidValue,
    ];

    pub fn is_recoverable(self) -> bool {
        Self::RECOVERABLE.contains(&self)
    }
}

/// Creates a missing section error
pub fn missing_section(path: impl Into<String>, section: impl Into<String>) -> BotcfgError {
    BotcfgError::MissingSection {
        path: path.into(),
        section: section.into(),
    }
}

/// Creates a missing section header error
pub fn missing_section_header(path: impl Into<String>, line: usize) -> BotcfgError {
    BotcfgError::MissingSectionHeader {
        path: path.into(),
        line,
    }
}

/// Creates a missing option error
pub fn missing_option(
    path: impl Into<String>,
    section: impl Into<String>,
    option: impl Into<String>,
) -> BotcfgError {
    BotcfgError::MissingOption {
        path: path.into(),
        section: section.into(),
        option: option.into(),
    }
}

/// Creates an invalid value error
pub fn invalid_value(
    path: impl Into<String>,
    section: impl Into<String>,
    option: impl Into<String>,
    reason: impl Into<String>,
) -> BotcfgError {
    BotcfgError::InvalidValue {
        path: path.into(),
        section: section.into(),
        option: option.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed line error
pub fn malformed_line(
    path: impl Into<String>,
    line: usize,
    content: impl Into<String>,
) -> BotcfgError {
    BotcfgError::MalformedLine {
        path: path.into(),
        line,
        content: content.into(),
    }
}

/// Creates a duplicate section error
pub fn duplicate_section(
    path: impl Into<String>,
    line: usize,
    section: impl Into<String>,
) -> BotcfgError {
    BotcfgError::DuplicateSection {
        path: path.into(),
        line,
        section: section.into(),
    }
}

/// Creates a duplicate option error
pub fn duplicate_option(
    path: impl Into<String>,
    line: usize,
    section: impl Into<String>,
    option: impl Into<String>,
) -> BotcfgError {
    BotcfgError::DuplicateOption {
        path: path.into(),
        line,
        section: section.into(),
        option: option.into(),
    }
}
