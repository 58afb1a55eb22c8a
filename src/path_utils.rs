//! Cross-platform path utilities
//!
//! Glob patterns are written with forward slashes, so paths are normalized
//! before matching.

use std::path::Path;

/// Render a path with `/` separators
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use botcfg::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("bots/atba/atba.cfg")), "bots/atba/atba.cfg");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
