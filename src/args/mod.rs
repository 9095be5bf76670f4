//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::{Command, RunArgs, VolleyArgs};
pub use types::{OutputFormat, PositiveUsize};
