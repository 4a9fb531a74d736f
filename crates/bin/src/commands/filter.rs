//! Filter command - keeps only the selected keys of a JSON object.

use crate::cli::FilterArgs;
use crate::output::{OutputFormat, print_map, read_map};

/// Run the filter command
pub fn run(args: &FilterArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let map = read_map(&args.input)?;
    let filtered = recmap::maps::filter_keys(&map, &args.keys);

    tracing::debug!(kept = filtered.len(), dropped = map.len() - filtered.len(), "Filtered keys");
    print_map(&filtered, format)?;
    Ok(())
}
