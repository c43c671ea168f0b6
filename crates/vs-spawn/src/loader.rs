//! CSV vertiport layout loader.
//!
//! # CSV format
//!
//! One row per vertiport.  Rows may appear in any order, but the ids must
//! cover `0..n` exactly once: a vertiport's id is its index in the layout.
//!
//! ```csv
//! id,x,y
//! 0,100.0,100.0
//! 1,700.0,100.0
//! 2,400.0,400.0
//! ```
//!
//! The loader only checks the file's own shape.  Whether the layout suits a
//! world (at least two vertiports, inside the bounds) is left to
//! `AirspaceConfig::validate`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vs_core::Vec2;

use crate::{SpawnError, SpawnResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VertiportRecord {
    id: u16,
    x:  f64,
    y:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a vertiport layout from a CSV file.
pub fn load_vertiports_csv(path: &Path) -> SpawnResult<Vec<Vec2>> {
    let file = std::fs::File::open(path).map_err(SpawnError::Io)?;
    load_vertiports_reader(file)
}

/// Like [`load_vertiports_csv`] but accepts any `Read` source.
pub fn load_vertiports_reader<R: Read>(reader: R) -> SpawnResult<Vec<Vec2>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<VertiportRecord> = Vec::new();

    for result in csv_reader.deserialize::<VertiportRecord>() {
        let row = result.map_err(|e| SpawnError::Parse(e.to_string()))?;
        if !(row.x.is_finite() && row.y.is_finite()) {
            return Err(SpawnError::Layout(format!(
                "vertiport {} has a non-finite position ({}, {})", row.id, row.x, row.y
            )));
        }
        rows.push(row);
    }

    rows.sort_by_key(|r| r.id);
    for (expected, row) in rows.iter().enumerate() {
        if usize::from(row.id) != expected {
            return Err(SpawnError::Layout(format!(
                "vertiport ids must run 0..{} without gaps or repeats; found {} at position {expected}",
                rows.len(),
                row.id,
            )));
        }
    }

    Ok(rows.into_iter().map(|r| Vec2::new(r.x, r.y)).collect())
}
