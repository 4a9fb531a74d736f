//! Rename command - renames top-level keys of a JSON object.

use std::collections::HashMap;

use crate::cli::RenameArgs;
use crate::output::{OutputFormat, print_map, read_map};

/// Run the rename command
pub fn run(args: &RenameArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let map = read_map(&args.input)?;
    let renames: HashMap<String, String> = args.renames.iter().cloned().collect();

    for old in renames.keys().filter(|old| !map.contains_key(*old)) {
        tracing::warn!(key = %old, "Rename source key not present in input");
    }

    print_map(&recmap::maps::rename_keys(&map, &renames), format)?;
    Ok(())
}
