use tracing::debug;
use volley::args::{Command, VolleyArgs};
use volley::config::{RunSettings, apply_config, load_config};
use volley::error::{AppResult, ValidationError};

use crate::app::{print_invalid_parameters, run_local};

#[derive(Debug)]
pub(super) enum RunPlan {
    Local(RunSettings),
    /// Inputs failed validation: report it and exit without sending anything.
    Rejected(ValidationError),
}

pub(super) fn build_plan(args: &VolleyArgs) -> AppResult<RunPlan> {
    match &args.command {
        Command::Run(run_args) => {
            let config = load_config(run_args.config.as_deref())?;
            match apply_config(run_args, config.as_ref()) {
                Ok(settings) => Ok(RunPlan::Local(settings)),
                Err(err) => Ok(RunPlan::Rejected(err)),
            }
        }
    }
}

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Local(settings) => {
            run_local(&settings).await?;
            Ok(())
        }
        RunPlan::Rejected(err) => {
            debug!("Rejected run parameters: {:?}", err);
            print_invalid_parameters(&err);
            Ok(())
        }
    }
}
