use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{error, warn};
use url::Url;

use crate::config::model::EndpointConfig;

use super::result::ProbeResult;

/// Hard ceiling on connect + response time for a single probe. A response
/// that arrives later than this counts as a failed check even if its
/// status is 2xx.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Extract the aggregation key (lowercase hostname, no port) from a URL.
///
/// Returns `None` for URLs that cannot be probed over HTTP: malformed
/// URLs, URLs without a host, and non-http(s) schemes. Callers must not
/// count such endpoints toward any domain's statistics.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Error parsing URL {url}: {e}");
            return None;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        error!("Error parsing URL {url}: unsupported scheme {}", parsed.scheme());
        return None;
    }

    match parsed.host_str() {
        Some(host) => Some(host.to_ascii_lowercase()),
        None => {
            error!("Error parsing URL {url}: no host");
            None
        }
    }
}

/// Probe a single endpoint and classify the outcome.
///
/// The endpoint is up iff the response status is in [200, 300) and the
/// response arrives within [`PROBE_TIMEOUT`]. Timeouts, connection errors,
/// and other transport failures are logged and classified as down; they
/// never propagate, so one bad endpoint cannot abort a cycle.
pub async fn check_endpoint(client: &Client, endpoint: &EndpointConfig) -> ProbeResult {
    let Some(domain) = extract_domain(&endpoint.url) else {
        return ProbeResult::failed(None);
    };

    let mut request = client
        .request(endpoint.http_method(), &endpoint.url)
        .timeout(PROBE_TIMEOUT);
    for (name, value) in &endpoint.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &endpoint.body {
        request = request.json(body);
    }

    let start = Instant::now();
    match request.send().await {
        Ok(response) => {
            let elapsed = start.elapsed();
            let success = response.status().is_success() && elapsed <= PROBE_TIMEOUT;
            ProbeResult {
                domain: Some(domain),
                success,
            }
        }
        Err(e) => {
            warn!("Request failed for {}: {e}", endpoint.url);
            ProbeResult::failed(Some(domain))
        }
    }
}
