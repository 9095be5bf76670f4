//! Core library for the `volley` CLI.
//!
//! `volley` sends a fixed number of GET requests to one URL from a fixed
//! number of concurrent workers and reports the elapsed time and the
//! distribution of status codes. Requests that never produce a response are
//! counted under the sentinel status `0`.
//!
//! The engine lives in [`http::run_load_test`] (worker fan-out and join) and
//! [`metrics::summarize`] (reduction into a [`metrics::Report`]); inputs are
//! validated into a [`config::LoadTestConfig`] first.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
