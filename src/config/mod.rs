//! Configuration loading, merging and validation.
pub(crate) mod apply;
mod loader;
pub mod types;


pub use apply::{RunSettings, apply_config};
pub use loader::load_config;
pub use types::{ConfigFile, LoadTestConfig, MAX_TOTAL_REQUESTS};

#[cfg(test)]
pub(crate) use loader::load_config_file;
