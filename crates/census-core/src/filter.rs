//! Filter predicates narrowing a census.

use serde::{Deserialize, Serialize};

use crate::error::{CensusError, CensusResult};
use crate::seed::defaults;
use crate::types::{Census, CensusEntry};

/// Filter configuration applied to a full census.
///
/// The two predicates compose by logical AND. A name of
/// [`defaults::ALL_ANIMALS`] bypasses the name predicate; a minimum count
/// of 0 bypasses the count predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusFilter {
    /// Exact animal name to keep, or "all".
    pub name: String,

    /// Minimum occurrence count an entry must reach to be kept.
    pub min_count: u64,
}

impl Default for CensusFilter {
    fn default() -> Self {
        Self {
            name: defaults::ALL_ANIMALS.to_string(),
            min_count: defaults::MIN_COUNT,
        }
    }
}

impl CensusFilter {
    /// Creates a validated filter configuration.
    pub fn new(name: impl Into<String>, min_count: u64) -> CensusResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CensusError::invalid_filter(
                "name",
                "must be an animal name or \"all\"",
            ));
        }

        Ok(Self { name, min_count })
    }

    /// True if both predicates are at their pass-through defaults.
    pub fn is_pass_through(&self) -> bool {
        self.name == defaults::ALL_ANIMALS && self.min_count == defaults::MIN_COUNT
    }

    /// Applies both predicates to a single entry.
    pub fn matches(&self, entry: &CensusEntry) -> bool {
        let name_ok = self.name == defaults::ALL_ANIMALS || entry.name == self.name;
        name_ok && entry.count >= self.min_count
    }

    /// Produces the filtered census from a copy of the full census.
    ///
    /// Entry order is preserved. An empty result is a valid terminal
    /// state, not an error.
    pub fn apply(&self, census: &Census) -> Census {
        let entries = census
            .entries()
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        Census::from_entries(entries)
    }
}
