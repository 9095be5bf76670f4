//! HTTP request execution and worker orchestration.
mod client;
mod sender;

#[cfg(test)]
mod test_support;

pub use client::{Fetcher, HttpFetcher};
pub use sender::run_load_test;
