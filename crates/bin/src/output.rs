//! Input and output helpers for JSON maps.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use recmap::Map;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

impl OutputFormat {
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Read a JSON object from `path`, or from stdin when `path` is `-`.
pub fn read_map(path: &Path) -> recmap::Result<Map> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read input");
    Ok(serde_json::from_str(&text)?)
}

/// Render `map` as JSON in the requested format.
pub fn render_map(map: &Map, format: OutputFormat) -> recmap::Result<String> {
    // HashMap order is arbitrary; sort keys for stable output
    let sorted: std::collections::BTreeMap<_, _> = map.iter().collect();
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&sorted)?,
        OutputFormat::Compact => serde_json::to_string(&sorted)?,
    };
    Ok(rendered)
}

/// Print `map` to stdout as JSON in the requested format.
pub fn print_map(map: &Map, format: OutputFormat) -> recmap::Result<()> {
    println!("{}", render_map(map, format)?);
    Ok(())
}
