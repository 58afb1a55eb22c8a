//! Bundle loading
//!
//! [`BundleLoader`] is the seam between directory scanning and config
//! parsing. The scanner only needs the loaded value to be comparable and
//! hashable; everything about the file format lives behind the trait.

use std::hash::Hash;
use std::path::Path;

use crate::config::ConfigDocument;
use crate::domain::ConfigBundle;
use crate::error::{Result, file_read_failed};

/// Turns one file into one bundle
pub trait BundleLoader {
    type Bundle: Eq + Hash;

    /// Load the bundle stored at `path`
    ///
    /// Files that merely aren't bundles should fail with a recoverable parse
    /// error (see [`crate::error::BotcfgError::is_recoverable`]).
    fn load(&self, path: &Path) -> Result<Self::Bundle>;
}

impl<F, B> BundleLoader for F
where
    F: Fn(&Path) -> Result<B>,
    B: Eq + Hash,
{
    type Bundle = B;

    fn load(&self, path: &Path) -> Result<B> {
        self(path)
    }
}

/// Loads bot configs written in the `.cfg` INI dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct CfgBundleLoader;

impl BundleLoader for CfgBundleLoader {
    type Bundle = ConfigBundle;

    fn load(&self, path: &Path) -> Result<ConfigBundle> {
        let origin = path.display().to_string();
        let text =
            std::fs::read_to_string(path).map_err(|e| file_read_failed(&origin, e.to_string()))?;

        let document = ConfigDocument::parse(&text, &origin)?;
        let bundle = ConfigBundle::from_document(document, path)?;

        tracing::trace!(path = %origin, name = bundle.name(), "loaded bundle");
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BotcfgError;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atba.cfg");
        std::fs::write(&path, "[Locations]\nname = Atba\npython_file = atba.py\n").unwrap();

        let bundle = CfgBundleLoader.load(&path).unwrap();
        assert_eq!(bundle.name(), "Atba");
        assert_eq!(bundle.source(), path.as_path());
        assert_eq!(bundle.resolve("atba.py"), temp.path().join("atba.py"));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = CfgBundleLoader
            .load(&temp.path().join("nope.cfg"))
            .unwrap_err();
        assert!(matches!(err, BotcfgError::FileReadFailed { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_load_non_utf8_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.cfg");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x5b]).unwrap();

        let err = CfgBundleLoader.load(&path).unwrap_err();
        assert!(matches!(err, BotcfgError::FileReadFailed { .. }));
    }

    #[test]
    fn test_closure_loader() {
        let loader = |path: &Path| -> Result<String> {
            Ok(path.file_name().unwrap().to_string_lossy().into_owned())
        };
        assert_eq!(loader.load(Path::new("x/y.cfg")).unwrap(), "y.cfg");
    }
}
