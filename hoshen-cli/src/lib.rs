//! Support library for the hoshen CLI binary.
//!
//! Re-exports the command pipeline and logging setup so tests can drive them
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
