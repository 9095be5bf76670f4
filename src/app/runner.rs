use std::sync::Arc;

use volley::args::OutputFormat;
use volley::config::RunSettings;
use volley::error::{AppError, AppResult};
use volley::http::{HttpFetcher, run_load_test};
use volley::metrics::Report;

use super::summary::{print_report, run_header_lines};

/// Runs a validated load test against the network and prints its report.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the report
/// cannot be serialized.
pub(crate) async fn run_local(settings: &RunSettings) -> AppResult<Report> {
    let fetcher = Arc::new(HttpFetcher::new().map_err(AppError::http)?);

    if settings.output_format == OutputFormat::Text {
        for line in run_header_lines(&settings.load_test) {
            println!("{}", line);
        }
    }

    let report = run_load_test(fetcher, &settings.load_test).await;
    print_report(&report, settings.output_format)?;
    Ok(report)
}
