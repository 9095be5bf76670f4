use crate::args::{OutputFormat, RunArgs};
use crate::error::ValidationError;

use super::types::{ConfigFile, LoadTestConfig};

/// Concurrency used when neither the CLI nor the config file sets one.
pub(crate) const DEFAULT_CONCURRENCY: i64 = 1;

/// Everything a `run` needs once CLI and config file have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub load_test: LoadTestConfig,
    pub output_format: OutputFormat,
}

/// Merges `run` arguments over an optional config file and validates the result.
/// Values given on the command line take precedence.
///
/// # Errors
///
/// Returns an error when the merged URL is missing/empty or a count is missing
/// or not positive.
pub fn apply_config(
    args: &RunArgs,
    config: Option<&ConfigFile>,
) -> Result<RunSettings, ValidationError> {
    let url = args
        .url
        .clone()
        .or_else(|| config.and_then(|config| config.url.clone()))
        .ok_or(ValidationError::MissingUrl)?;
    let requests = args
        .requests
        .or_else(|| config.and_then(|config| config.requests))
        .ok_or(ValidationError::MissingRequests)?;
    let concurrency = args
        .concurrency
        .or_else(|| config.and_then(|config| config.concurrency))
        .unwrap_or(DEFAULT_CONCURRENCY);
    let output_format = args
        .output_format
        .or_else(|| config.and_then(|config| config.output_format))
        .unwrap_or_default();

    Ok(RunSettings {
        load_test: LoadTestConfig::new(url, requests, concurrency)?,
        output_format,
    })
}
