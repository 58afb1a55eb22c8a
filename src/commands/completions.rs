//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use botcfg::BotcfgError;
use botcfg::error::Result;

use crate::cli::CompletionsArgs;

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(BotcfgError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "botcfg", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell_names() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("pwsh").unwrap(), Shell::PowerShell);
        assert_eq!(parse_shell("Zsh").unwrap(), Shell::Zsh);
        assert_eq!(parse_shell("FISH").unwrap(), Shell::Fish);
    }

    #[test]
    fn test_parse_shell_unknown() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, BotcfgError::UnknownShell { .. }));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
