use std::collections::HashMap;

use tokio::sync::mpsc;

use super::types::HostStats;
use crate::http::RequestOutcome;

/// Single-consumer fold loop over the completion channel. Every host gets a
/// zeroed entry up front so hosts with no completed tasks still appear in
/// the report. Arrival order does not matter; the loop is the only writer.
pub(crate) async fn collect_outcomes(
    hosts: &[String],
    mut outcome_rx: mpsc::Receiver<(String, RequestOutcome)>,
) -> HashMap<String, HostStats> {
    let mut stats: HashMap<String, HostStats> = hosts
        .iter()
        .map(|host| (host.clone(), HostStats::default()))
        .collect();

    while let Some((host, outcome)) = outcome_rx.recv().await {
        stats.entry(host).or_default().fold(&outcome);
    }

    stats
}
