//! CLI argument definitions for the recmap binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Key-level utilities for flat JSON maps
#[derive(Parser, Debug)]
#[command(name = "recmap")]
#[command(about = "recmap: reshape flat JSON maps")]
#[command(version)]
pub struct Cli {
    /// Print single-line JSON instead of pretty-printed output
    #[arg(long, global = true, env = "RECMAP_COMPACT")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename top-level keys
    Rename(RenameArgs),
    /// Merge two maps; keys of the right map win
    Join(JoinArgs),
    /// Keep only the listed keys
    Filter(FilterArgs),
}

/// Arguments for the rename command
#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Input JSON object file, `-` for stdin
    pub input: PathBuf,

    /// Rename pair in the form `old=new`; may be repeated
    #[arg(short, long = "rename", value_name = "OLD=NEW", value_parser = parse_rename)]
    pub renames: Vec<(String, String)>,
}

/// Arguments for the join command
#[derive(clap::Args, Debug)]
pub struct JoinArgs {
    /// Left JSON object file, `-` for stdin
    pub left: PathBuf,

    /// Right JSON object file, `-` for stdin
    pub right: PathBuf,
}

/// Arguments for the filter command
#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Input JSON object file, `-` for stdin
    pub input: PathBuf,

    /// Keys to keep
    #[arg(short, long, value_delimiter = ',', required = true, env = "RECMAP_KEYS")]
    pub keys: Vec<String>,
}

fn parse_rename(pair: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((old, new)) if !old.is_empty() && !new.is_empty() => {
            Ok((old.to_string(), new.to_string()))
        }
        _ => Err(format!("expected OLD=NEW, got '{pair}'")),
    }
}
