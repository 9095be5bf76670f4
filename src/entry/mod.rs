mod plan;

use clap::Parser;
use volley::args::VolleyArgs;
use volley::error::AppResult;

use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let args = VolleyArgs::parse();

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}
