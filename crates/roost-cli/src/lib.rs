//! Roost CLI support
//!
//! File loading and command bodies for the `roost` binary, kept in a library
//! so they can be tested without spawning a process.

pub mod commands;

pub use commands::{decide, load_config, load_input, row, InputFiles};
