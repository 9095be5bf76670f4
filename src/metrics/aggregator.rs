use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;

use super::types::{Outcome, Report};

/// Single-threaded reducer from outcomes to a [`Report`].
#[derive(Debug, Default)]
pub struct Aggregator {
    total: u64,
    status_200: u64,
    distribution: BTreeMap<Outcome, u64>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.total = self.total.saturating_add(1);
        if outcome.is_success() {
            self.status_200 = self.status_200.saturating_add(1);
        }
        let count = self.distribution.entry(outcome).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[must_use]
    pub fn finish(self, elapsed: Duration) -> Report {
        Report {
            elapsed,
            total: self.total,
            status_200: self.status_200,
            distribution: self.distribution,
        }
    }
}

/// Reduces a finite outcome sequence into a report.
#[must_use]
pub fn summarize<I>(outcomes: I, elapsed: Duration) -> Report
where
    I: IntoIterator<Item = Outcome>,
{
    let mut aggregator = Aggregator::new();
    for outcome in outcomes {
        aggregator.record(outcome);
    }
    aggregator.finish(elapsed)
}

/// Drains `outcome_rx` until every sender has been dropped.
pub async fn summarize_channel(
    mut outcome_rx: mpsc::Receiver<Outcome>,
    elapsed: Duration,
) -> Report {
    let mut aggregator = Aggregator::new();
    while let Some(outcome) = outcome_rx.recv().await {
        aggregator.record(outcome);
    }
    aggregator.finish(elapsed)
}
