use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::metrics::Outcome;

use super::super::client::Fetcher;

pub(super) fn spawn_worker<F>(
    workers: &mut JoinSet<()>,
    worker_id: usize,
    iterations: usize,
    fetcher: Arc<F>,
    url: Arc<str>,
    outcome_tx: mpsc::Sender<Outcome>,
) where
    F: Fetcher + 'static,
{
    workers.spawn(async move {
        for _ in 0..iterations {
            let outcome = fetcher.fetch(&url).await;
            if outcome_tx.send(outcome).await.is_err() {
                warn!("Outcome channel closed; worker {} stopping early.", worker_id);
                return;
            }
        }
        debug!("Worker {} sent {} requests.", worker_id, iterations);
    });
}
