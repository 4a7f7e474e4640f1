use std::collections::HashMap;

use crate::probe::ProbeResult;

/// Cumulative check counters for a single domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DomainStat {
    pub total: u64,
    pub successes: u64,
}

impl DomainStat {
    /// Availability as a whole-number percentage. Decimals are dropped,
    /// never rounded: 1 success out of 3 checks reports 33.
    pub fn availability(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.successes * 100 / self.total
        }
    }
}

/// Per-domain availability counters for the process lifetime.
///
/// Entries are created on first observation of a domain and never removed
/// or reset. Counters are mutated only by [`DomainStats::update`], which the
/// scheduler calls once per cycle after every probe of that cycle has
/// resolved, so no probe ever writes to a counter concurrently.
#[derive(Debug, Default)]
pub struct DomainStats {
    stats: HashMap<String, DomainStat>,
}

impl DomainStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one cycle's probe results as a single batch.
    ///
    /// Each result with a known domain adds one to that domain's total, and
    /// one to its successes iff the probe succeeded. Results without a
    /// domain are dropped; the probe already logged those.
    pub fn update(&mut self, results: impl IntoIterator<Item = ProbeResult>) {
        for result in results {
            let Some(domain) = result.domain else {
                continue;
            };
            let stat = self.stats.entry(domain).or_default();
            stat.total += 1;
            if result.success {
                stat.successes += 1;
            }
        }
    }

    /// Read-only view of every domain observed so far, sorted by domain
    /// name for stable report order.
    pub fn snapshot(&self) -> Vec<(String, DomainStat)> {
        let mut rows: Vec<_> = self
            .stats
            .iter()
            .map(|(domain, stat)| (domain.clone(), *stat))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    pub fn get(&self, domain: &str) -> Option<DomainStat> {
        self.stats.get(domain).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
