//! Census types: occurrence entries and the census collection.

use std::mem;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Occurrence record for a single animal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusEntry {
    /// Animal name, unique within a census.
    pub name: String,

    /// Number of times the name was observed. Never decremented.
    pub count: u64,
}

impl CensusEntry {
    /// Creates an entry for a name observed for the first time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
        }
    }
}

/// Distinct-name occurrence counts derived from a seed sequence.
///
/// Names are unique within a census. The sum of counts across all entries
/// equals the length of the seed sequence the census was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    entries: Vec<CensusEntry>,
}

impl Census {
    /// Builds a census by deduplicate-and-count over a seed sequence.
    ///
    /// Each observation is matched against the existing entries with a
    /// linear scan; a match increments its count, otherwise a fresh entry
    /// is appended with count 1. Quadratic over the seed length, which is
    /// adequate for the toy input sizes this crate targets.
    pub fn from_seed(seed: &[&str]) -> Self {
        let mut entries: Vec<CensusEntry> = Vec::new();

        for (i, name) in seed.iter().enumerate() {
            match entries.iter_mut().find(|e| e.name == *name) {
                Some(entry) => {
                    entry.count += 1;
                    debug!("{} already counted, now at {}", name, entry.count);
                }
                None => {
                    debug!("iter[{}]: adding {} to census", i, name);
                    entries.push(CensusEntry::new(*name));
                }
            }
        }

        Self { entries }
    }

    pub(crate) fn from_entries(entries: Vec<CensusEntry>) -> Self {
        Self { entries }
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries survived building or filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[CensusEntry] {
        &self.entries
    }

    /// Looks up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&CensusEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Sum of counts across all entries.
    pub fn total_observations(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Orders entries by name, byte-wise lexicographic ascending.
    ///
    /// Names are unique after building, so the result is fully determined;
    /// sorting an already-sorted census is a no-op.
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Approximate heap bytes held by this census. Diagnostic only.
    pub fn approx_heap_bytes(&self) -> usize {
        self.entries.capacity() * mem::size_of::<CensusEntry>()
            + self.entries.iter().map(|e| e.name.capacity()).sum::<usize>()
    }
}
