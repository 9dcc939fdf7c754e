//! Subcommand implementations.
//!
//! Each command writes to the writers it is given so it can be driven from
//! tests without a terminal.

pub mod config;
pub mod health;
pub mod scan;
