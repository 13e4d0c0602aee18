pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompareArgs, TableArgs};
pub use commands::{run, run_with_writer};
