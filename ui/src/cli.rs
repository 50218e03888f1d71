use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments accepted by the `swatch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "swatch",
    version,
    about = "Bootswatch theme catalog and switcher markup"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file to load (default: ~/.config/swatch/config.toml and ./config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = 0,
        help = "Wait up to SECS for the catalog before answering (default: cache read bounds only)"
    )]
    pub wait: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every cached theme with its stylesheet
    List,
    /// Show one theme as JSON
    Show {
        /// Theme name, case-insensitive
        name: String,
    },
    /// Render the stylesheet link, <html> attributes and switcher widget
    Render {
        /// Raw Cookie header carrying the current selection
        #[arg(long, value_name = "HEADER")]
        cookie: Option<String>,
    },
    /// Fetch the catalog again and replace the cached snapshot
    Reload,
    /// Check configuration values against supported ranges
    Validate,
    /// Print the effective configuration as TOML
    Config,
}

impl Command {
    /// Whether the command reads the theme catalog.
    pub fn needs_catalog(&self) -> bool {
        !matches!(self, Command::Validate | Command::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_with_cookie() {
        let cli = Cli::try_parse_from([
            "swatch",
            "--wait",
            "5",
            "render",
            "--cookie",
            "bootswatch-theme=flatly",
        ])
        .unwrap();

        assert_eq!(cli.wait, 5);
        assert_eq!(
            cli.command,
            Command::Render {
                cookie: Some("bootswatch-theme=flatly".to_string())
            }
        );
        assert!(cli.command.needs_catalog());
    }

    #[test]
    fn test_parse_show_requires_name() {
        assert!(Cli::try_parse_from(["swatch", "show"]).is_err());
        assert!(!Command::Validate.needs_catalog());
    }
}
