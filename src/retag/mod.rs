use anyhow::Result;
use std::path::Path;

pub mod error;
pub mod reader;
pub mod registry;
pub mod segment;
pub mod writer;

pub use error::RetagError;
pub use registry::TagRegistry;
pub use segment::Segment;

/// What a completed run processed.
#[derive(Debug)]
pub struct RunSummary {
    pub segments: usize,
    pub unique_tags: usize,
}

/// Read segments from `input`, replace each tag with its letter code and
/// write the relabeled segments to `output` in the original order.
pub fn run(input: &Path, output: &Path, debug: bool) -> Result<RunSummary> {
    let segments = reader::read_segments(input)?;

    let mut registry = TagRegistry::new();
    for segment in &segments {
        registry.register(&segment.tag);
    }

    let mut rows = Vec::with_capacity(segments.len());
    for segment in &segments {
        // Every tag was registered above, so the lookup cannot miss.
        let letter = registry
            .letter(&segment.tag)
            .ok_or_else(|| anyhow::anyhow!("Tag '{}' missing from registry", segment.tag))?;
        if debug {
            eprintln!(
                "{:.6}\t{:.6}\t{}  ({})",
                segment.start, segment.end, letter, segment.tag
            );
        }
        rows.push((segment.start, segment.end, letter));
    }

    writer::write_segments(output, &rows)?;

    Ok(RunSummary {
        segments: rows.len(),
        unique_tags: registry.len(),
    })
}
