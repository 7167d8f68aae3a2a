use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `start\tend\tletter` line per row, times with six fractional
/// digits.
pub fn write_segments(path: &Path, rows: &[(f64, f64, char)]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for (start, end, letter) in rows {
        writeln!(writer, "{start:.6}\t{end:.6}\t{letter}")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
