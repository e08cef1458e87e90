use clap::{CommandFactory, FromArgMatches};

use crate::app;
use crate::args::BenchArgs;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run(args))
}

fn parse_args() -> AppResult<BenchArgs> {
    let matches = BenchArgs::command().get_matches();
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok(args)
}
