//! Benchmark support crate for hoshen.
//!
//! Provides seeded synthetic occupancy masks and parameter types used by
//! Criterion benchmarks for the node-source engine, the image engine and the
//! label-map census.

pub mod error;
pub mod params;
pub mod source;
