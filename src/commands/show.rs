//! Show command implementation

use botcfg::error::Result;
use botcfg::{BundleLoader, CfgBundleLoader};

use crate::cli::ShowArgs;
use crate::ui;

/// Run show command
///
/// Unlike a scan, every load error is reported, recoverable or not.
pub fn run(args: ShowArgs) -> Result<()> {
    let bundle = CfgBundleLoader.load(&args.file)?;
    println!("{}", ui::render_bundle(&bundle, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use botcfg::BotcfgError;
    use tempfile::TempDir;

    #[test]
    fn test_show_reports_recoverable_errors() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("settings.cfg");
        std::fs::write(&file, "[Graphics]\nvsync = on\n").unwrap();

        let err = run(ShowArgs {
            file,
            format: OutputFormat::Text,
        })
        .unwrap_err();
        assert!(matches!(err, BotcfgError::MissingSection { .. }));
    }

    #[test]
    fn test_show_valid_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("atba.cfg");
        std::fs::write(&file, "[Locations]\nname = Atba\n").unwrap();

        assert!(
            run(ShowArgs {
                file,
                format: OutputFormat::Json,
            })
            .is_ok()
        );
    }
}
