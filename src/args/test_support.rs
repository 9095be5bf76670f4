use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{Command, RunArgs, VolleyArgs};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<VolleyArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    VolleyArgs::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn parse_run_args<I, T>(args: I) -> AppResult<RunArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match parse_test_args(args)?.command {
        Command::Run(run) => Ok(run),
    }
}
