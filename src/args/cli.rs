use clap::{Args, Parser, Subcommand};

use super::parsers::parse_bool_env;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal HTTP load generator: fixed request count, fixed concurrency, status-code report."
)]
pub struct VolleyArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = parse_bool_env,
        global = true
    )]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run load test
    Run(RunArgs),
}

/// Raw `run` inputs. Counts stay signed so that non-positive values reach
/// validation and get the same message as a missing value.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// URL of the service to be tested
    #[arg(long, short = 'u', env = "VOLLEY_URL")]
    pub url: Option<String>,

    /// Total number of requests
    #[arg(
        long,
        short = 'n',
        env = "VOLLEY_REQUESTS",
        allow_negative_numbers = true
    )]
    pub requests: Option<i64>,

    /// Number of concurrent workers (defaults to 1)
    #[arg(
        long,
        short = 'c',
        env = "VOLLEY_CONCURRENCY",
        allow_negative_numbers = true
    )]
    pub concurrency: Option<i64>,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Report format
    #[arg(long = "output-format", value_enum)]
    pub output_format: Option<OutputFormat>,
}
