//! Scan command implementation
//!
//! Scans a directory tree and prints every distinct bundle, sorted by name.

use botcfg::error::Result;
use botcfg::{CfgBundleLoader, ConfigBundle, DirectoryScanner, ScanOptions};

use crate::cli::ScanArgs;
use crate::ui;

/// Run scan command
pub fn run(args: ScanArgs) -> Result<()> {
    let output = scan_to_string(&args)?;
    println!("{output}");
    Ok(())
}

fn scan_to_string(args: &ScanArgs) -> Result<String> {
    let options = ScanOptions {
        pattern: args.pattern.clone(),
        follow_links: !args.no_follow_links,
    };
    let scanner = DirectoryScanner::with_options(CfgBundleLoader, options);

    tracing::info!(dir = %args.dir.display(), pattern = %args.pattern, "scanning");
    let bundles = scanner.scan(&args.dir)?;

    let mut sorted: Vec<&ConfigBundle> = bundles.iter().collect();
    sorted.sort_by(|a, b| {
        a.name()
            .cmp(b.name())
            .then_with(|| a.source().cmp(b.source()))
    });

    ui::render_bundles(&sorted, args.format)
}
