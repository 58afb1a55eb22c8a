//! Directory scanning for config bundles
//!
//! Walks a directory tree, hands every file matching the scan pattern to a
//! [`BundleLoader`] and collects the results into a set. Files the loader
//! rejects with a recoverable parse error are skipped; any other error ends
//! the scan.
//!
//! Like a shell glob, hidden entries (names starting with `.`) below the
//! root are neither matched nor descended into, and directories that cannot
//! be read are skipped.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::ConfigBundle;
use crate::error::{BotcfgError, Result};
use crate::loader::{BundleLoader, CfgBundleLoader};
use crate::path_utils::to_forward_slashes;

/// Pattern matched against paths relative to the scan root
pub const DEFAULT_PATTERN: &str = "**/*.cfg";

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Glob selecting candidate files, relative to the scan root
    pub pattern: String,
    /// Whether symlinked files and directories are followed
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            follow_links: true,
        }
    }
}

/// Finds and loads every bundle below a directory
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner<L = CfgBundleLoader> {
    loader: L,
    options: ScanOptions,
}

impl<L: BundleLoader> DirectoryScanner<L> {
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, ScanOptions::default())
    }

    pub fn with_options(loader: L, options: ScanOptions) -> Self {
        Self { loader, options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// List files below `root` that match the scan pattern
    ///
    /// Paths come back in walk order (sorted by file name within each
    /// directory). A missing root yields no paths.
    pub fn candidates(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let glob = Glob::new(&self.options.pattern).map_err(|e| BotcfgError::InvalidPattern {
            pattern: self.options.pattern.clone(),
            reason: e.to_string(),
        })?;

        let walker = WalkDir::new(root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        let mut matches = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.depth() == 0
                        && err.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound)
                    {
                        tracing::debug!(root = %root.display(), "scan root does not exist");
                    } else {
                        tracing::warn!("skipping unreadable entry: {err}");
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            let normalized = to_forward_slashes(relative);
            let candidate = CandidatePath::from(normalized.as_str());
            if glob.matched(&candidate).is_some() {
                matches.push(entry.into_path());
            }
        }

        Ok(matches)
    }

    /// Load every matching file below `root` into a deduplicated set
    ///
    /// Stops at the first error that is not a recoverable parse error; the
    /// bundles collected up to that point are dropped.
    pub fn scan(&self, root: &Path) -> Result<HashSet<L::Bundle>> {
        let mut bundles = HashSet::new();
        let mut skipped = 0usize;

        for path in self.candidates(root)? {
            match self.loader.load(&path) {
                Ok(bundle) => {
                    if !bundles.insert(bundle) {
                        tracing::debug!(path = %path.display(), "duplicate bundle");
                    }
                }
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(path = %path.display(), "skipping: {err}");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            root = %root.display(),
            found = bundles.len(),
            skipped,
            "scan finished"
        );
        Ok(bundles)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Scan `root` for `.cfg` bot configs with the default loader and options
pub fn scan_directory(root: impl AsRef<Path>) -> Result<HashSet<ConfigBundle>> {
    DirectoryScanner::new(CfgBundleLoader).scan(root.as_ref())
}
