use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "custattr", bin_name = "custattr", version = get_version())]
#[command(
    about = "Filter and label customer address custom attributes for the storefront",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to load (must exist)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop attributes hidden from the storefront and attach option labels
    Filter {
        /// JSON catalog providing metadata, attribute config and options
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// JSON attribute set to decorate (reads stdin when omitted)
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show the effective configuration, or a single key
    Config {
        /// Setting to show
        key: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_filter_with_input() {
        let cli = Cli::parse_from([
            "custattr",
            "filter",
            "--catalog",
            "catalog.json",
            "--input",
            "attrs.json",
        ]);
        match cli.command {
            Commands::Filter { catalog, input } => {
                assert_eq!(catalog, PathBuf::from("catalog.json"));
                assert_eq!(input, Some(PathBuf::from("attrs.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["custattr", "config", "entity_type", "-v", "-c", "x.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Config { key: Some(ref k) } if k == "entity_type"));
    }

    #[test]
    fn filter_requires_catalog() {
        assert!(Cli::try_parse_from(["custattr", "filter"]).is_err());
    }
}
