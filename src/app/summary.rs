use std::collections::BTreeMap;

use serde::Serialize;
use volley::args::OutputFormat;
use volley::config::LoadTestConfig;
use volley::error::{AppResult, ValidationError};
use volley::metrics::Report;

pub(crate) const INVALID_PARAMETERS: &str =
    "Invalid parameters. Use --url, --requests, and --concurrency.";

#[derive(Debug, Serialize)]
struct ReportJson {
    elapsed_ms: u64,
    total_requests: u64,
    status_200: u64,
    distribution: BTreeMap<u16, u64>,
}

impl From<&Report> for ReportJson {
    fn from(report: &Report) -> Self {
        Self {
            elapsed_ms: u64::try_from(report.elapsed().as_millis()).unwrap_or(u64::MAX),
            total_requests: report.total(),
            status_200: report.status_200(),
            distribution: report
                .distribution()
                .iter()
                .map(|(outcome, count)| (outcome.code(), *count))
                .collect(),
        }
    }
}

pub(crate) fn run_header_lines(config: &LoadTestConfig) -> Vec<String> {
    vec![
        format!("Starting load tests: {}", config.url()),
        format!(
            "Total requests: {}, Concurrency: {}",
            config.total_requests().get(),
            config.concurrency().get()
        ),
    ]
}

pub(crate) fn summary_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.distribution().len().saturating_add(5));
    lines.push("Load Test Report:".to_owned());
    lines.push(format!("Total Time: {:?}", report.elapsed()));
    lines.push(format!("Total Requests: {}", report.total()));
    lines.push(format!("Requests with Status 200: {}", report.status_200()));
    lines.push("HTTP Status Distribution:".to_owned());
    for (outcome, count) in report.distribution() {
        lines.push(format!("Status {}: {}", outcome, count));
    }
    lines
}

pub(crate) fn report_json(report: &Report) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&ReportJson::from(report))?)
}

pub(crate) fn print_report(report: &Report, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(report) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", report_json(report)?),
    }
    Ok(())
}

pub(crate) fn print_invalid_parameters(error: &ValidationError) {
    println!("{}", INVALID_PARAMETERS);
    println!("{}", error);
}
