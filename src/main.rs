use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use version_bump_guard::config::{CheckConfig, DEFAULT_MASTER_DIR};
use version_bump_guard::version::checker::ConsistencyChecker;
use version_bump_guard::version::revision::FsRevision;

#[derive(Parser)]
#[command(name = "version-bump-guard")]
#[command(
    version,
    about = "Check that the release version is bumped over master and declared consistently"
)]
struct Cli {
    /// Checkout of the branch under test
    #[arg(long, value_name = "DIR", default_value = ".")]
    current: PathBuf,

    /// Checkout of the master branch
    #[arg(long, value_name = "DIR", default_value = DEFAULT_MASTER_DIR)]
    master: PathBuf,

    /// Build-properties file name inside each checkout
    #[arg(long, value_name = "NAME")]
    properties: Option<PathBuf>,

    /// README file name inside each checkout
    #[arg(long, value_name = "NAME")]
    readme: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reject version components that are not purely numeric
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.json_logs);

    let config = load_config(&cli)?;
    debug!("configuration: {:?}", config);

    let checker = ConsistencyChecker::new(&config)?;
    let current = FsRevision::new(&cli.current, &config.files);
    let master = FsRevision::new(&cli.master, &config.files);

    let report = checker
        .check(&current, &master)
        .context("release version check failed")?;

    println!("{report}");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<CheckConfig> {
    let mut config = match &cli.config {
        Some(path) => CheckConfig::load(path)?,
        None => CheckConfig::default(),
    };

    if let Some(properties) = &cli.properties {
        config.files.properties = properties.clone();
    }
    if let Some(readme) = &cli.readme {
        config.files.readme = readme.clone();
    }
    if cli.strict {
        config.strict_components = true;
    }

    Ok(config)
}

fn setup_logging(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("version_bump_guard={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
