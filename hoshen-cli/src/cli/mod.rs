//! Command-line interface for labeling images.
//!
//! `label` labels an image file and can write the label map and a palette
//! rendering next to it; `census` recounts the blobs of a label map written
//! earlier.

mod commands;

pub use commands::{
    CensusCommand, Cli, CliError, Command, ExecutionSummary, LabelCommand, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
