//! CensusMgr - census lifecycle driver.

use std::time::Instant;

use tracing::{debug, info, warn};

use census_core::{Census, CensusFilter};

/// CensusMgr drives the census lifecycle.
///
/// Processing flow:
/// 1. Build: seed sequence -> full census, sorted alphabetically
/// 2. Filter: full census -> filtered census (copy, predicates ANDed)
/// 3. Teardown: both censuses dropped, accounting logged
///
/// Both collections are owned by the manager and never shared; the whole
/// flow is synchronous and runs once per process.
pub struct CensusMgr {
    /// Active filter configuration, fixed at construction.
    filter: CensusFilter,

    /// Full census, empty until built.
    census: Census,

    /// Filtered census, empty until filters are applied.
    filtered: Census,
}

impl CensusMgr {
    /// Creates a new CensusMgr with the given filter configuration.
    pub fn new(filter: CensusFilter) -> Self {
        Self {
            filter,
            census: Census::default(),
            filtered: Census::default(),
        }
    }

    /// Active filter configuration.
    pub fn filter(&self) -> &CensusFilter {
        &self.filter
    }

    /// Full census. Empty until [`build`](Self::build) has run.
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// Filtered census. Empty until [`apply_filter`](Self::apply_filter)
    /// has run.
    pub fn filtered(&self) -> &Census {
        &self.filtered
    }

    /// Builds the full census from a seed sequence and sorts it by name.
    pub fn build(&mut self, seed: &[&str]) {
        let start = Instant::now();

        let mut census = Census::from_seed(seed);
        census.sort_by_name();

        info!(
            "census built: {} distinct names from {} observations in {} ms",
            census.len(),
            census.total_observations(),
            start.elapsed().as_millis()
        );
        debug!("census holds approx {} heap bytes", census.approx_heap_bytes());

        self.census = census;
    }

    /// Applies the configured filters to a copy of the full census.
    ///
    /// The full census is left untouched; filtering an unbuilt census
    /// yields an empty result.
    pub fn apply_filter(&mut self) {
        if self.census.is_empty() {
            warn!("applying filters to an empty census");
        }

        if self.filter.is_pass_through() {
            debug!("filters at defaults, keeping every entry");
        }

        let filtered = self.filter.apply(&self.census);
        info!(
            "filters applied: kept {} of {} entries",
            filtered.len(),
            self.census.len()
        );

        self.filtered = filtered;
    }

    /// Drops both censuses, logging the approximate bytes released.
    pub fn teardown(&mut self) {
        let released = self.census.approx_heap_bytes() + self.filtered.approx_heap_bytes();

        self.census = Census::default();
        self.filtered = Census::default();

        info!("teardown released approx {} heap bytes", released);
    }
}

impl Default for CensusMgr {
    fn default() -> Self {
        Self::new(CensusFilter::default())
    }
}
