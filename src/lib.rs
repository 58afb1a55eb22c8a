//! botcfg - find bot configuration bundles
//!
//! Recursively scans a directory for `.cfg` files, loads each one as a
//! [`ConfigBundle`] and returns the distinct bundles that loaded. Files that
//! turn out not to be bot configs (missing sections or options, bad values)
//! are skipped; anything else stops the scan.
//!
//! ```no_run
//! let bundles = botcfg::scan_directory("bots")?;
//! for bundle in &bundles {
//!     println!("{} ({})", bundle.name(), bundle.source().display());
//! }
//! # Ok::<(), botcfg::BotcfgError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod path_utils;
pub mod scanner;

pub use config::ConfigDocument;
pub use domain::{BotDetails, ConfigBundle};
pub use error::{BotcfgError, ParseErrorKind, Result};
pub use loader::{BundleLoader, CfgBundleLoader};
pub use scanner::{DEFAULT_PATTERN, DirectoryScanner, ScanOptions, scan_directory};
