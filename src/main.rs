//! jira-points: look up story points for t-shirt size labels.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jira_points::services::{render_labels, render_mapping, OutputFormat};
use jira_points::{ConfigRegistry, ProjectConfig};

#[derive(Parser)]
#[command(name = "jira-points")]
#[command(about = "T-shirt size to Jira story point lookup")]
struct Cli {
    /// Points configuration to use (defaults to estimates.config_name)
    #[arg(long, global = true)]
    config_name: Option<String>,

    /// Read settings from this file instead of the layered config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the points for one or more labels
    Lookup {
        /// Size labels (XS, S, M, L, XL)
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// List the declared size labels
    Labels,
    /// Print the whole mapping
    Show {
        /// Output format (table or json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// List registered configuration names
    Configs,
}

/// Initialize logging; RUST_LOG wins over the configured level
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Load settings, returning the file they came from (if any)
fn load_config(cli: &Cli) -> Result<(ProjectConfig, Option<PathBuf>)> {
    match &cli.config {
        Some(path) => Ok((ProjectConfig::load_file(path)?, Some(path.clone()))),
        None => {
            let project_root = ProjectConfig::discover_root(None)
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
            let config = ProjectConfig::load(Some(&project_root))?;
            Ok((config, ProjectConfig::project_config_path(&project_root)))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = load_config(&cli).context("failed to load configuration")?;
    init_logging(&config.logging.level);
    match &source {
        Some(path) => tracing::debug!("Using config file {:?}", path),
        None => tracing::debug!("Using default configuration"),
    }

    let registry = ConfigRegistry::global();
    let config_name = cli
        .config_name
        .as_deref()
        .unwrap_or(&config.estimates.config_name);
    tracing::debug!("Using points configuration {:?}", config_name);

    match &cli.command {
        Commands::Lookup { labels } => {
            let provider = registry.provider(config_name)?;
            for label in labels {
                let points = provider.estimate(label)?;
                println!("{} = {}", label, points);
            }
        }
        Commands::Labels => {
            let mapping = registry.get(config_name)?;
            print!("{}", render_labels(&mapping.declared_labels()));
        }
        Commands::Show { format } => {
            let mapping = registry.get(config_name)?;
            let format = format.unwrap_or(config.output.format);
            let output = render_mapping(mapping, format)?;
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Commands::Configs => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
