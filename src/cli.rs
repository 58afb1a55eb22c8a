//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use botcfg::DEFAULT_PATTERN;

/// botcfg - find bot configuration bundles
///
/// Scan directory trees for `.cfg` bot configs and report the distinct ones.
#[derive(Parser, Debug)]
#[command(
    name = "botcfg",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Find bot configuration bundles in a directory tree",
    long_about = "botcfg recursively scans a directory for .cfg bot configs, skips files that \
                  are not bot configs and lists every distinct bundle it finds.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  botcfg scan ./bots\n    \
                  botcfg scan ./bots --format json\n    \
                  botcfg show ./bots/atba/atba.cfg"
)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory for bot configs
    Scan(ScanArgs),

    /// Load a single bot config and print it
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for bundle listings
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scan the current directory:\n    botcfg scan\n\n\
                  Scan a bot folder as JSON:\n    botcfg scan ./bots --format json\n\n\
                  Only look in one subdirectory:\n    botcfg scan ./bots --pattern 'community/**/*.cfg'")]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob selecting candidate files, relative to DIR
    #[arg(long, env = "BOTCFG_PATTERN", default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Do not follow symbolic links
    #[arg(long)]
    pub no_follow_links: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a bot config:\n    botcfg show ./bots/atba/atba.cfg\n\n\
                  Show it as YAML:\n    botcfg show ./bots/atba/atba.cfg --format yaml")]
pub struct ShowArgs {
    /// Config file to load
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    botcfg completions --shell bash > ~/.bash_completion.d/botcfg\n\n\
                  Generate zsh completions:\n    botcfg completions --shell zsh > ~/.zfunc/_botcfg\n\n\
                  Generate fish completions:\n    botcfg completions --shell fish > ~/.config/fish/completions/botcfg.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
