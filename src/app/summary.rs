use std::collections::HashMap;
use std::time::Duration;

use crate::metrics::HostStats;

/// Microseconds per second.
const MICROS_PER_SEC: u128 = 1_000_000;
/// Divisor turning a sub-second microsecond remainder into 4 decimal places.
const FRACTION_DIVISOR: u128 = 100;

/// Render the per-host report in input order. Each host block ends with a
/// blank line; latency lines show `-` when the host had no successes.
pub(crate) fn report_lines(hosts: &[String], stats: &HashMap<String, HostStats>) -> Vec<String> {
    let mut lines = Vec::new();
    for host in hosts {
        let Some(host_stats) = stats.get(host) else {
            continue;
        };
        lines.push(format!("Host: {}", host));
        lines.push(format!("  Success: {}", host_stats.success));
        lines.push(format!("  Failed:  {}", host_stats.failed));
        lines.push(format!("  Errors:  {}", host_stats.errors));
        let [min_line, max_line, avg_line] = host_stats.latency_summary().map_or_else(
            || ["  Min: -".to_owned(), "  Max: -".to_owned(), "  Avg: -".to_owned()],
            |summary| {
                [
                    format!("  Min: {} s", format_secs(summary.min)),
                    format!("  Max: {} s", format_secs(summary.max)),
                    format!("  Avg: {} s", format_secs(summary.avg)),
                ]
            },
        );
        lines.push(min_line);
        lines.push(max_line);
        lines.push(avg_line);
        lines.push(String::new());
    }
    lines
}

/// Seconds with exactly four decimal places, integer arithmetic only.
fn format_secs(value: Duration) -> String {
    let micros = value.as_micros();
    let whole = micros.checked_div(MICROS_PER_SEC).unwrap_or(0);
    let fraction = micros
        .checked_rem(MICROS_PER_SEC)
        .and_then(|remainder| remainder.checked_div(FRACTION_DIVISOR))
        .unwrap_or(0);
    format!("{}.{:04}", whole, fraction)
}
