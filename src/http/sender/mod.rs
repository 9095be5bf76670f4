mod worker;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::config::LoadTestConfig;
use crate::metrics::{Outcome, Report, summarize_channel};

use super::client::Fetcher;
use worker::spawn_worker;

/// Runs one load test to completion and returns its report.
///
/// `concurrency` workers each send `total_requests / concurrency` GETs. The
/// remainder of that division is not sent, so the report total can be lower
/// than the requested total. Transport failures are counted as outcome `0`;
/// nothing here is fatal.
pub async fn run_load_test<F>(fetcher: Arc<F>, config: &LoadTestConfig) -> Report
where
    F: Fetcher + 'static,
{
    let concurrency = config.concurrency().get();
    let per_worker = config.per_worker();
    let dropped = config.dropped_requests();
    if dropped > 0 {
        warn!(
            "{} requests are not divisible across {} workers; {} will not be sent.",
            config.total_requests().get(),
            concurrency,
            dropped
        );
    }
    info!(
        url = config.url(),
        requests = config.total_requests().get(),
        concurrency,
        per_worker,
        "Starting load test"
    );

    let url: Arc<str> = Arc::from(config.url());
    // Sized for every outcome: nothing drains the channel until the join.
    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(config.total_requests().get());

    let started = Instant::now();
    let mut workers = JoinSet::new();
    if per_worker > 0 {
        for worker_id in 0..concurrency {
            spawn_worker(
                &mut workers,
                worker_id,
                per_worker,
                Arc::clone(&fetcher),
                Arc::clone(&url),
                outcome_tx.clone(),
            );
        }
    }
    drop(outcome_tx);

    while let Some(result) = workers.join_next().await {
        if let Err(err) = result {
            error!("Worker task failed: {}", err);
        }
    }
    let elapsed = started.elapsed();

    let report = summarize_channel(outcome_rx, elapsed).await;
    info!(
        total = report.total(),
        status_200 = report.status_200(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "Load test finished"
    );
    report
}
