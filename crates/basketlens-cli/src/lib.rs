//! Command dispatch for the basketlens binary.
//!
//! `main.rs` stays a thin shell over this crate so end-to-end command
//! runs can be driven from the test suite without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
