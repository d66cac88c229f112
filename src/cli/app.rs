//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::shop;
use crate::storage::{Config, DEFAULT_ENV_FILE};

#[derive(Parser)]
#[command(name = "shops")]
#[command(author, version, about = "Shop and product inventory backed by a JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// The data file name (defaults to $SHOPS_DATA)
    #[arg(long, short = 'd', global = true)]
    pub data: Option<PathBuf>,

    /// .env file to read SHOPS_DATA from when it is not set
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new product
    Add {
        /// The shop's name
        #[arg(long, short = 'n', value_parser = NonEmptyStringValueParser::new())]
        name: String,

        /// The shop's product
        #[arg(long, short = 'p', default_value = "")]
        product: String,

        /// The price of the product
        #[arg(long, short = 'r', allow_negative_numbers = true)]
        price: i64,
    },

    /// Display all products
    Display,

    /// Select the products of one shop
    Select {
        /// The selected shop
        #[arg(long, short = 'n', visible_alias = "shop", short_alias = 's')]
        name: String,
    },
}

/// Main entry point for the CLI
///
/// Errors are reported through [`Output`], so `--format json` keeps
/// stderr to a single JSON object.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Shops CLI starting");

    match execute(cli, &output) {
        Ok(()) => {
            output.verbose("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Resolves config, loads the store, runs the command and saves if dirty
fn execute(cli: Cli, output: &Output) -> Result<()> {
    let config = Config::resolve(cli.data, &cli.env_file)?;
    output.verbose_ctx(
        "config",
        &format!(
            "Data file: {} (from {})",
            config.data_file.display(),
            config.source
        ),
    );

    let mut store = shop::open_store(output, &config)?;

    match cli.command {
        Commands::Add { name, product, price } => {
            shop::add(output, &mut store, name, product, price)
        }
        Commands::Display => shop::display(output, &store),
        Commands::Select { name } => shop::select(output, &store, &name),
    }

    if store
        .save_if_dirty()
        .with_context(|| format!("Failed to save {}", config.data_file.display()))?
    {
        output.verbose_ctx("save", &format!("Wrote {}", config.data_file.display()));
        output.success("Data saved");
    } else {
        output.verbose_ctx("save", "No changes to save");
    }

    Ok(())
}
