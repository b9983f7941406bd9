use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sinta_av::config::{default_config_path, find_config_file, get_config, load_config, Verbosity};
use sinta_av::{AvClient, Config, FieldSelection, OutFormat, SourceRegistry};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// sinta-av - Read author records from the SINTA author verification portal
#[derive(Parser, Debug)]
#[command(name = "sinta-av")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read author records from the SINTA author verification portal", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape one or more authors from a source
    Fetch {
        /// Source to read (google, scopus, wos, ipr)
        #[arg(long, short)]
        source: String,

        /// Output shape: records or table
        #[arg(long, short, default_value = "records")]
        format: OutFormat,

        /// Comma-separated fields to keep, or * for all
        #[arg(long, default_value = "*")]
        fields: FieldSelection,

        /// Portal username (overrides the config file)
        #[arg(long, env = "SINTA_USERNAME")]
        username: Option<String>,

        /// Portal password (overrides the config file)
        #[arg(long, env = "SINTA_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Author IDs; more than one makes a batch
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List available sources and their fields
    Sources,

    /// Write a default configuration file
    InitConfig {
        /// Where to write (defaults to the per-user config path)
        path: Option<PathBuf>,
    },
}

fn init_tracing(cli: &Cli, config: &Config) {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        config.logging.verbosity.raised(cli.verbose)
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| verbosity.filter_directive().to_string()),
    );
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.timestamps {
        registry.with(fmt_layer).init();
    } else {
        registry.with(fmt_layer.without_time()).init();
    }
}

fn read_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let path = cli.config.clone().or_else(find_config_file);
    let config = match &path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => get_config().context("Failed to read configuration from environment")?,
    };
    Ok((config, path))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = read_config(&cli)?;
    init_tracing(&cli, &config);

    if let Some(path) = &config_path {
        tracing::debug!("Using config file: {}", path.display());
    }

    match cli.command {
        Commands::Fetch {
            source,
            format,
            fields,
            username,
            password,
            ids,
        } => {
            let username = username
                .or_else(|| config.credentials.username.clone())
                .unwrap_or_default();
            let password = password
                .or_else(|| config.credentials.password.clone())
                .unwrap_or_default();

            let client = AvClient::connect(username, password, &config).await?;
            let output = if ids.len() == 1 {
                client.get(&source, ids[0].as_str(), format, &fields).await?
            } else {
                client.get(&source, ids, format, &fields).await?
            };

            tracing::info!(rows = output.len(), "Done");
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Sources => {
            let registry = SourceRegistry::new();
            for spec in registry.all() {
                println!("{} - {}", spec.id, spec.name);
                println!("  fields: {}", spec.field_names().collect::<Vec<_>>().join(", "));
            }
        }

        Commands::InitConfig { path } => {
            let path = path
                .or_else(default_config_path)
                .context("Could not determine a config directory; pass a path")?;
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            Config::default().save(&path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
