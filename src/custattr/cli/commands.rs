use super::setup::{Cli, Commands};
use clap::Parser;
use custattr::config::DecoratorConfig;
use custattr::decorator::AttributeDecorator;
use custattr::error::{AttrError, Result};
use custattr::model::AttributeSet;
use custattr::providers::Catalog;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().map_err(AttrError::Io)?;
    let config = DecoratorConfig::load(cli.config.as_deref(), &cwd)?;

    let output = match cli.command {
        Commands::Filter { catalog, input } => {
            let raw = read_input(input.as_deref())?;
            handle_filter(&catalog, &raw, config)?
        }
        Commands::Config { key } => handle_config(&config, key.as_deref())?,
    };

    println!("{}", output);
    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON. `--verbose` forces debug,
/// otherwise `RUST_LOG` applies with a `warn` fallback.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(AttrError::Io),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(AttrError::Io)?;
            Ok(buf)
        }
    }
}

fn handle_filter(catalog: &Path, raw: &str, config: DecoratorConfig) -> Result<String> {
    let catalog = Catalog::from_path(catalog)?;
    let attributes: AttributeSet = serde_json::from_str(raw)?;

    let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog).with_config(config);
    let decorated = decorator.filter_visible(attributes)?;

    Ok(serde_json::to_string_pretty(&decorated)?)
}

fn handle_config(config: &DecoratorConfig, key: Option<&str>) -> Result<String> {
    match key {
        Some(key) => config
            .get(key)
            .ok_or_else(|| AttrError::Config(format!("Unknown config key: {}", key))),
        None => Ok(config
            .entries()
            .into_iter()
            .map(|(key, value)| format!("{} = {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
