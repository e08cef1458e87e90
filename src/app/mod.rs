pub(crate) mod summary;


use tracing::{error, info};

use crate::args::BenchArgs;
use crate::error::AppResult;
use crate::hosts;
use crate::http;
use crate::metrics;
use crate::sinks;

/// One full run: resolve and validate the target set, fan the requests out,
/// fold completions, render and deliver the report. Per-request failures
/// surface only as counters; a report-write failure is logged and does not
/// fail the run.
pub(crate) async fn run(args: BenchArgs) -> AppResult<()> {
    let BenchArgs {
        hosts: inline_hosts,
        count,
        file,
        output,
        ..
    } = args;

    let host_list = hosts::resolve_hosts(inline_hosts.as_deref(), file.as_deref())?;
    let count = count.get();
    let client = http::build_client()?;

    let total = u64::try_from(host_list.len())
        .unwrap_or(u64::MAX)
        .saturating_mul(count);
    info!(
        "Dispatching {} requests across {} hosts",
        total,
        host_list.len()
    );

    let request_fn = move |url: String| {
        let client = client.clone();
        async move { http::execute_request(&client, &url).await }
    };
    let outcome_rx = http::dispatch_requests(&host_list, count, request_fn);
    let stats = metrics::collect_outcomes(&host_list, outcome_rx).await;

    let completed: u64 = stats.values().map(metrics::HostStats::completed).sum();
    info!("Completed {} requests", completed);

    let report = summary::report_lines(&host_list, &stats);
    if let Err(err) = sinks::write_report(output.as_deref(), &report).await {
        error!("{}", err);
    }

    Ok(())
}
