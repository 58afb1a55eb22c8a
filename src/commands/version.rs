//! Version command implementation

use botcfg::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("botcfg {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Default pattern: {}", botcfg::DEFAULT_PATTERN);

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
