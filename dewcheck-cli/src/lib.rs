//! Command-line front end for `dewcheck-core`
//!
//! Prints the fixed-point and reference dew point terms for one reading, or
//! the log table as Rust source.

pub mod cli;
pub mod logging;
