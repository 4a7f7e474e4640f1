/// Outcome of a single endpoint probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Aggregation key derived from the endpoint URL, or `None` when the
    /// URL could not be parsed into a probeable host.
    pub domain: Option<String>,

    /// True only when the response status was 2xx and the full response
    /// arrived within the probe timeout.
    pub success: bool,
}

impl ProbeResult {
    pub fn failed(domain: Option<String>) -> Self {
        Self {
            domain,
            success: false,
        }
    }
}
