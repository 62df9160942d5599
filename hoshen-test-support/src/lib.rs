//! Test helpers shared by the hoshen crates.
//!
//! [`tracing`] captures spans and events so suites can assert on the
//! instrumentation of the labeling engines; [`ci`] reads the environment knobs
//! that scale property tests.

pub mod ci;
pub mod tracing;
