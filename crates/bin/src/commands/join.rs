//! Join command - shallow merge of two JSON objects.

use std::path::Path;

use crate::cli::JoinArgs;
use crate::output::{OutputFormat, print_map, read_map};

/// Run the join command
pub fn run(args: &JoinArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = Path::new("-");
    if args.left.as_path() == stdin && args.right.as_path() == stdin {
        return Err("stdin can only be read once; pass at least one file".into());
    }

    let left = read_map(&args.left)?;
    let right = read_map(&args.right)?;

    let overlap = left.keys().filter(|key| right.contains_key(*key)).count();
    tracing::debug!(overlap, "Right-hand values replace overlapping keys");

    print_map(&recmap::maps::join(&left, &right), format)?;
    Ok(())
}
