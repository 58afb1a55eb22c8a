//! File system errors

use super::BotcfgError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BotcfgError {
    BotcfgError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
