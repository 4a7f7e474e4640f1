use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::model::EndpointConfig;
use crate::probe::{self, ProbeResult};
use crate::stats::DomainStats;

/// Target wall-clock period between the starts of successive cycles.
pub const CYCLE_PERIOD: Duration = Duration::from_secs(15);

/// Cap on in-flight probes, shared across the process lifetime. Probes
/// borrow a permit for the duration of one request and return it when
/// the request resolves.
pub const MAX_CONCURRENT_PROBES: usize = 100;

/// How long to sleep after a cycle so the next one starts [`CYCLE_PERIOD`]
/// after the previous start. A cycle that overran the period gets no sleep
/// and no catch-up: the next cycle simply starts immediately.
pub fn time_until_next_cycle(cycle_duration: Duration) -> Duration {
    CYCLE_PERIOD.saturating_sub(cycle_duration)
}

/// Run one health-check cycle: probe every endpoint concurrently, wait for
/// all of them, fold the batch into the aggregator, then report every
/// domain known so far.
pub async fn run_cycle(
    client: &Client,
    limiter: &Arc<Semaphore>,
    endpoints: &[EndpointConfig],
    stats: &mut DomainStats,
) {
    let mut handles = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let client = client.clone();
        let limiter = Arc::clone(limiter);
        let endpoint = endpoint.clone();

        handles.push(tokio::spawn(async move {
            // The limiter is never closed, so acquisition can only wait,
            // not fail. The permit is held until the probe resolves.
            let _permit = limiter.acquire_owned().await.ok();
            probe::check_endpoint(&client, &endpoint).await
        }));
    }

    // No partial aggregation: every probe of this cycle resolves (each is
    // bounded by the probe timeout) before the batch is applied.
    let mut results: Vec<ProbeResult> = Vec::with_capacity(handles.len());
    for handle in handles {
        if let Ok(result) = handle.await {
            results.push(result);
        }
    }

    stats.update(results);

    for (domain, stat) in stats.snapshot() {
        info!(
            "Domain: {domain} - Availability: {}% (Checks: {}, Successes: {})",
            stat.availability(),
            stat.total,
            stat.successes
        );
    }
}

/// Drive health-check cycles at a fixed cadence, forever.
///
/// Cycles never overlap: each iteration runs one full cycle, logs its
/// duration, then sleeps whatever remains of the period. Cancellation
/// comes from outside by dropping this future (main races it against
/// Ctrl-C); abandoned probes never touch the aggregator, so counters
/// cannot be torn.
pub async fn run(client: Client, endpoints: Vec<EndpointConfig>) {
    let limiter = Arc::new(Semaphore::new(MAX_CONCURRENT_PROBES));
    let mut stats = DomainStats::new();

    info!(
        "Starting health checks for {} endpoints. Press Ctrl+C to exit.",
        endpoints.len()
    );

    loop {
        let cycle_start = Instant::now();
        run_cycle(&client, &limiter, &endpoints, &mut stats).await;
        let cycle_duration = cycle_start.elapsed();
        info!("Cycle completed in {:.2} seconds.", cycle_duration.as_secs_f64());

        tokio::time::sleep(time_until_next_cycle(cycle_duration)).await;
    }
}
