use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::retag::segment::Segment;

/// Read every annotation line of `path` into segments, in file order.
/// Trailing blank lines are skipped; anything else malformed is fatal.
pub fn read_segments(path: &Path) -> Result<Vec<Segment>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut segments = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        segments.push(Segment::parse(line, index + 1)?);
    }

    Ok(segments)
}
