//! # animalsd - Animal Census Daemon
//!
//! Counts occurrences of animal names from a fixed observation list,
//! optionally narrows the result by an exact-name filter and/or a
//! minimum-count filter, sorts it alphabetically, and reports through the
//! structured log stream.
//!
//! ## Responsibilities
//! - Build the full census from the compile-time seed sequence
//! - Apply the configured filters to a copy of the full census
//! - Report distinct counts, totals, filter criteria, and per-entry counts
//! - Release both censuses at teardown, logging the accounting
//!
//! ## Lifecycle
//!
//! The whole pipeline runs once, synchronously, at process start:
//!
//! `Uninitialized -> Built -> Filtered -> Reported -> Torn down`
//!
//! There is no event loop and no shared state; [`CensusMgr`] owns both
//! collections for the lifetime of the run.

mod census_mgr;
mod report;

pub use census_mgr::CensusMgr;
pub use report::CensusReport;
