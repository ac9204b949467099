//! Command implementations for the `segname` CLI.
//!
//! Each `run_*` function returns the text to print, so the binary stays a
//! thin dispatcher and the commands can be tested directly.

pub mod commands;
pub mod config;
