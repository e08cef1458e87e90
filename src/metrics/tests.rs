use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::{AppError, AppResult};
use crate::http::RequestOutcome;

use super::{HostStats, collect_outcomes};

fn success(millis: u64) -> RequestOutcome {
    RequestOutcome::Success {
        status: 200,
        elapsed: Duration::from_millis(millis),
    }
}

#[test]
fn fold_moves_exactly_one_counter_per_outcome() -> AppResult<()> {
    let mut stats = HostStats::default();
    stats.fold(&success(10));
    stats.fold(&RequestOutcome::Failed { status: 503 });
    stats.fold(&RequestOutcome::TransportError);
    stats.fold(&success(20));

    if stats.success != 2 || stats.failed != 1 || stats.errors != 1 {
        return Err(AppError::validation(format!("Unexpected stats: {:?}", stats)));
    }
    if stats.completed() != 4 {
        return Err(AppError::validation("Unexpected completed total"));
    }
    if stats.latencies.len() != usize::try_from(stats.success).unwrap_or(usize::MAX) {
        return Err(AppError::validation("Latency count must match successes"));
    }
    Ok(())
}

#[test]
fn fold_is_order_independent() -> AppResult<()> {
    let outcomes = vec![
        success(10),
        RequestOutcome::Failed { status: 404 },
        RequestOutcome::TransportError,
        success(30),
        RequestOutcome::Failed { status: 500 },
        success(20),
    ];

    let mut forward = HostStats::default();
    for outcome in &outcomes {
        forward.fold(outcome);
    }
    let mut reversed = HostStats::default();
    for outcome in outcomes.iter().rev() {
        reversed.fold(outcome);
    }

    if forward.success != reversed.success
        || forward.failed != reversed.failed
        || forward.errors != reversed.errors
    {
        return Err(AppError::validation("Counters must not depend on order"));
    }

    let mut forward_latencies = forward.latencies.clone();
    let mut reversed_latencies = reversed.latencies.clone();
    forward_latencies.sort_unstable();
    reversed_latencies.sort_unstable();
    if forward_latencies != reversed_latencies {
        return Err(AppError::validation("Latency multiset must match"));
    }
    if forward.latency_summary() != reversed.latency_summary() {
        return Err(AppError::validation("Summary must not depend on order"));
    }
    Ok(())
}

#[test]
fn latency_summary_uses_success_samples_only() -> AppResult<()> {
    let mut stats = HostStats::default();
    stats.fold(&success(100));
    stats.fold(&success(200));
    stats.fold(&success(301));
    stats.fold(&RequestOutcome::Failed { status: 500 });

    let summary = stats
        .latency_summary()
        .ok_or_else(|| AppError::validation("Expected a summary"))?;
    if summary.min != Duration::from_millis(100) {
        return Err(AppError::validation("Unexpected min"));
    }
    if summary.max != Duration::from_millis(301) {
        return Err(AppError::validation("Unexpected max"));
    }
    // Integer average: (100_000 + 200_000 + 301_000) / 3 microseconds.
    if summary.avg != Duration::from_micros(200_333) {
        return Err(AppError::validation(format!("Unexpected avg: {:?}", summary.avg)));
    }
    Ok(())
}

#[test]
fn latency_summary_absent_without_successes() -> AppResult<()> {
    let mut stats = HostStats::default();
    stats.fold(&RequestOutcome::Failed { status: 503 });
    stats.fold(&RequestOutcome::TransportError);

    if stats.latency_summary().is_some() {
        return Err(AppError::validation("Expected no summary"));
    }
    Ok(())
}

#[tokio::test]
async fn collect_outcomes_seeds_zeroed_entries() -> AppResult<()> {
    let hosts = vec![
        "https://a.example.com".to_owned(),
        "https://b.example.com".to_owned(),
    ];
    let (outcome_tx, outcome_rx) = mpsc::channel(4);
    drop(outcome_tx);

    let stats = collect_outcomes(&hosts, outcome_rx).await;
    if stats.len() != 2 {
        return Err(AppError::validation("Expected one entry per host"));
    }
    for host in &hosts {
        let host_stats = stats
            .get(host)
            .ok_or_else(|| AppError::validation("Missing host entry"))?;
        if *host_stats != HostStats::default() {
            return Err(AppError::validation("Expected zeroed entry"));
        }
    }
    Ok(())
}

#[tokio::test]
async fn collect_outcomes_folds_interleaved_hosts() -> AppResult<()> {
    let fast = "https://fast.example.com".to_owned();
    let busy = "https://busy.example.com".to_owned();
    let hosts = vec![fast.clone(), busy.clone()];

    let (outcome_tx, outcome_rx) = mpsc::channel(8);
    // Interleaved arrival: three successes for one host, two failed
    // responses for the other.
    let sends = [
        (fast.clone(), success(10)),
        (busy.clone(), RequestOutcome::Failed { status: 503 }),
        (fast.clone(), success(30)),
        (busy.clone(), RequestOutcome::Failed { status: 503 }),
        (fast.clone(), success(20)),
    ];
    for (host, outcome) in sends {
        outcome_tx
            .send((host, outcome))
            .await
            .map_err(|err| AppError::validation(format!("send failed: {}", err)))?;
    }
    drop(outcome_tx);

    let stats = collect_outcomes(&hosts, outcome_rx).await;

    let fast_stats = stats
        .get(&fast)
        .ok_or_else(|| AppError::validation("Missing fast host"))?;
    if fast_stats.success != 3 || fast_stats.failed != 0 || fast_stats.errors != 0 {
        return Err(AppError::validation(format!("Unexpected: {:?}", fast_stats)));
    }
    let summary = fast_stats
        .latency_summary()
        .ok_or_else(|| AppError::validation("Expected summary for fast host"))?;
    if summary.min != Duration::from_millis(10) || summary.max != Duration::from_millis(30) {
        return Err(AppError::validation("Unexpected fast summary"));
    }

    let busy_stats = stats
        .get(&busy)
        .ok_or_else(|| AppError::validation("Missing busy host"))?;
    if busy_stats.success != 0 || busy_stats.failed != 2 || busy_stats.errors != 0 {
        return Err(AppError::validation(format!("Unexpected: {:?}", busy_stats)));
    }
    if busy_stats.latency_summary().is_some() {
        return Err(AppError::validation("Expected no summary for busy host"));
    }
    Ok(())
}
