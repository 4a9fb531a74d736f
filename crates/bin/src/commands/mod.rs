//! Subcommand implementations.

pub mod filter;
pub mod join;
pub mod rename;
