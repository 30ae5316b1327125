//! Command-line entry points for the two binaries.

pub mod args;
pub mod synthesize;
pub mod transcribe;
