//! Command Line Interface for the nhamlan batch job.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
