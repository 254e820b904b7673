//! Core data model for the animal census.
//!
//! This crate provides the domain types shared by the census daemon:
//!
//! - [`seed`]: the fixed observation sequence the census is built from
//! - [`Census`]: distinct-name occurrence counts with sorting and totals
//! - [`CensusFilter`]: name and minimum-count predicates over a census
//! - [`error`]: error types for census configuration
//!
//! # Pipeline
//!
//! A census is built once from the seed sequence, sorted alphabetically,
//! and then narrowed by applying a [`CensusFilter`] to a copy:
//!
//! ```
//! use census_core::{Census, CensusFilter};
//!
//! let mut census = Census::from_seed(&["dog", "dog", "cat"]);
//! census.sort_by_name();
//!
//! let filter = CensusFilter::new("all", 2).unwrap();
//! let filtered = filter.apply(&census);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.get("dog").unwrap().count, 2);
//! ```

pub mod error;
pub mod filter;
pub mod seed;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{CensusError, CensusResult};
pub use filter::CensusFilter;
pub use seed::SEED_ANIMALS;
pub use types::{Census, CensusEntry};
