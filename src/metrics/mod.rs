//! Outcome aggregation and the run report.
mod aggregator;
mod types;


pub use aggregator::{Aggregator, summarize, summarize_channel};
pub use types::{Outcome, Report};
