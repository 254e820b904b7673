//! Report assembly and emission for census results.

use serde::Serialize;
use tracing::info;

use census_core::{Census, CensusEntry, CensusFilter};

/// Snapshot of one census prepared for reporting.
///
/// The snapshot owns copies of the reported entries, so emitting or
/// serializing it has no effect on the underlying census.
#[derive(Debug, Clone, Serialize)]
pub struct CensusReport {
    /// Section label, e.g. "census" or "filtered".
    pub section: String,

    /// Number of distinct names.
    pub distinct: usize,

    /// Sum of counts across entries.
    pub total_observations: u64,

    /// Approximate heap bytes held by the census. Diagnostic only.
    pub approx_heap_bytes: usize,

    /// Filter configuration echoed for filtered sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<CensusFilter>,

    /// Entries in the census's current (sorted) order.
    pub entries: Vec<CensusEntry>,
}

impl CensusReport {
    /// Builds a report snapshot from a census.
    pub fn new(section: &str, census: &Census, filter: Option<&CensusFilter>) -> Self {
        Self {
            section: section.to_string(),
            distinct: census.len(),
            total_observations: census.total_observations(),
            approx_heap_bytes: census.approx_heap_bytes(),
            filter: filter.cloned(),
            entries: census.entries().to_vec(),
        }
    }

    /// Emits the report to the log stream, one event per fact.
    pub fn emit(&self) {
        info!("{} report:", self.section);
        info!(
            "  {} distinct names, {} observations total",
            self.distinct, self.total_observations
        );
        info!("  holding approx {} heap bytes", self.approx_heap_bytes);

        if let Some(filter) = &self.filter {
            info!("  filter criteria:");
            info!("    animal type: ({})", filter.name);
            info!("    minimum count: {}", filter.min_count);
        }

        info!("  contents:");
        for entry in &self.entries {
            info!("    ({}) appears {} times", entry.name, entry.count);
        }
        info!("  {} entries reported", self.entries.len());
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
