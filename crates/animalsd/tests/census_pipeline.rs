//! End-to-end census pipeline tests
//!
//! Exercises the full build -> filter -> sort -> report flow over the
//! fixed seed sequence.

use animalsd::{CensusMgr, CensusReport};
use census_core::{CensusFilter, SEED_ANIMALS};
use pretty_assertions::assert_eq;

/// Builds a manager, runs build and filter stages, and returns it.
fn run_pipeline(filter: CensusFilter) -> CensusMgr {
    let mut mgr = CensusMgr::new(filter);
    mgr.build(&SEED_ANIMALS);
    mgr.apply_filter();
    mgr
}

/// Full census over the fixed seed sequence
///
/// Scenario:
/// 1. Build the census from all 50 observations
/// 2. Verify distinct-name count and total observations
/// 3. Verify a few hand-counted entries
#[test]
fn test_full_census_shape() {
    let mgr = run_pipeline(CensusFilter::default());
    let census = mgr.census();

    assert_eq!(census.len(), 30);
    assert_eq!(census.total_observations(), 50);

    assert_eq!(census.get("shark").unwrap().count, 7);
    assert_eq!(census.get("lion").unwrap().count, 3);
    assert_eq!(census.get("cat").unwrap().count, 2);
    assert_eq!(census.get("moose").unwrap().count, 1);
}

/// Pass-through filters keep the census intact
#[test]
fn test_pass_through_filter_equals_full_census() {
    let mgr = run_pipeline(CensusFilter::default());

    assert_eq!(mgr.filtered(), mgr.census());
}

/// Minimum-count filter
///
/// Only "shark" occurs four or more times in the seed sequence.
#[test]
fn test_min_count_filter_keeps_only_shark() {
    let mgr = run_pipeline(CensusFilter::new("all", 4).unwrap());
    let filtered = mgr.filtered();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.get("shark").unwrap().count, 7);
}

/// Exact-name filter
#[test]
fn test_name_filter_keeps_single_entry() {
    let mgr = run_pipeline(CensusFilter::new("cat", 0).unwrap());
    let filtered = mgr.filtered();

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.get("cat").unwrap().count, 2);
}

/// Names absent from the seed sequence yield an empty, non-error result
#[test]
fn test_unknown_name_yields_empty_result() {
    let mgr = run_pipeline(CensusFilter::new("unicorn", 0).unwrap());

    assert!(mgr.filtered().is_empty());
}

/// Both filters compose by logical AND
#[test]
fn test_filters_compose_by_and() {
    let kept = run_pipeline(CensusFilter::new("shark", 4).unwrap());
    assert_eq!(kept.filtered().len(), 1);

    let dropped = run_pipeline(CensusFilter::new("cat", 4).unwrap());
    assert!(dropped.filtered().is_empty());
}

/// Sorted output is in ascending byte order
#[test]
fn test_census_is_sorted_by_name() {
    let mgr = run_pipeline(CensusFilter::default());
    let names: Vec<&str> = mgr
        .census()
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    assert_eq!(names.first(), Some(&"ape"));
    assert_eq!(names.last(), Some(&"worm"));
}

/// Report snapshot over the filtered census
///
/// Scenario:
/// 1. Run the pipeline with a minimum-count filter
/// 2. Snapshot the filtered census with the filter echoed
/// 3. Verify snapshot fields and JSON serialization
#[test]
fn test_filtered_report_snapshot_and_json() {
    let mgr = run_pipeline(CensusFilter::new("all", 4).unwrap());
    let report = CensusReport::new("filtered", mgr.filtered(), Some(mgr.filter()));

    assert_eq!(report.section, "filtered");
    assert_eq!(report.distinct, 1);
    assert_eq!(report.total_observations, 7);
    assert_eq!(report.filter.as_ref().unwrap().min_count, 4);

    let json = report.to_json().unwrap();
    assert!(json.contains("\"shark\""));
    assert!(json.contains("\"min_count\": 4"));
}

/// Teardown leaves the manager empty
#[test]
fn test_teardown_clears_state() {
    let mut mgr = run_pipeline(CensusFilter::default());
    mgr.teardown();

    assert!(mgr.census().is_empty());
    assert!(mgr.filtered().is_empty());
}
