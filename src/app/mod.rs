mod runner;
mod summary;

pub(crate) use runner::run_local;
pub(crate) use summary::print_invalid_parameters;
