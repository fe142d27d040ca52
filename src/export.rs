//! Flat text dump of a coloring
//!
//! Line 1 is the height h, followed by one line per color class in
//! sequence order holding its space-separated node ids:
//!
//! ```text
//! 2
//! 2 6 7
//! 3 4 5
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::sequence::ColorId;
use crate::splitter::{ColorClass, Coloring};
use crate::tree::{NodeId, MAX_HEIGHT};

/// Write a coloring in the flat text format.
pub fn write_coloring<W: Write>(writer: &mut W, coloring: &Coloring) -> Result<()> {
    writeln!(writer, "{}", coloring.height())?;
    for class in coloring.classes() {
        writeln!(writer, "{}", class)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a coloring into a string (useful for tests and snapshots).
pub fn render_coloring(coloring: &Coloring) -> Result<String> {
    let mut buffer = Vec::new();
    write_coloring(&mut buffer, coloring)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered coloring is not valid UTF-8"))
}

/// Write a coloring to `path`, replacing any existing file.
pub fn save_coloring<P: AsRef<Path>>(path: P, coloring: &Coloring) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_coloring(&mut writer, coloring)
        .with_context(|| format!("failed to write coloring to {}", path.display()))
}

/// Read a coloring back from the flat text format.
///
/// Classes are labelled by line order; declared sizes are the sizes read.
pub fn read_coloring<R: BufRead>(reader: R) -> Result<Coloring> {
    let mut lines = reader.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| anyhow!("empty coloring file: missing height line"))?;
    let header = header?;
    let height: u32 = header
        .trim()
        .parse()
        .with_context(|| format!("invalid height '{}' on line 1", header.trim()))?;
    if height > MAX_HEIGHT {
        bail!("height {} exceeds the supported maximum of {}", height, MAX_HEIGHT);
    }

    let mut classes = Vec::with_capacity(height as usize);
    for (line_no, line) in lines {
        let line = line?;
        if classes.len() == height as usize {
            if line.trim().is_empty() {
                continue;
            }
            bail!("unexpected extra class on line {} for height {}", line_no + 1, height);
        }

        let nodes = line
            .split_whitespace()
            .map(|token| match token.parse::<u64>() {
                Ok(id) if id >= 1 => Ok(NodeId::new(id)),
                _ => Err(anyhow!("invalid node id '{}' on line {}", token, line_no + 1)),
            })
            .collect::<Result<Vec<_>>>()?;
        classes.push(ColorClass::from_nodes(ColorId::new(classes.len() as u32), nodes));
    }

    if classes.len() != height as usize {
        bail!("expected {} color classes, found {}", height, classes.len());
    }
    Ok(Coloring::from_classes(height, classes))
}

/// Load a coloring from `path`.
pub fn load_coloring<P: AsRef<Path>>(path: P) -> Result<Coloring> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open coloring file {}", path.display()))?;
    read_coloring(BufReader::new(file))
        .with_context(|| format!("failed to parse coloring file {}", path.display()))
}
