use std::future::Future;

use tokio::sync::mpsc;

use super::executor::RequestOutcome;

/// Backpressure bound for the completion channel.
const OUTCOME_CHANNEL_CAPACITY: usize = 1024;

/// Spawn one task per (host, repetition) pair, all submitted immediately;
/// the runtime bounds actual parallelism. Completions arrive on the
/// returned channel in whatever order the network dictates, exactly
/// `hosts.len() * count` in total; the channel closes once the last task
/// has reported.
///
/// The request capability is injected so callers can fold synthetic
/// outcomes without touching the network.
pub(crate) fn dispatch_requests<F, Fut>(
    hosts: &[String],
    count: u64,
    request_fn: F,
) -> mpsc::Receiver<(String, RequestOutcome)>
where
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = RequestOutcome> + Send + 'static,
{
    let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
    let hosts = hosts.to_vec();

    tokio::spawn(async move {
        for host in hosts {
            for _ in 0..count {
                let request_fn = request_fn.clone();
                let outcome_tx = outcome_tx.clone();
                let host = host.clone();
                tokio::spawn(async move {
                    let outcome = request_fn(host.clone()).await;
                    drop(outcome_tx.send((host, outcome)).await);
                });
            }
        }
    });

    outcome_rx
}
