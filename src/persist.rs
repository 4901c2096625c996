//! Serialization of confusion sets.
//!
//! The on-disk format is chosen by output-file extension: `.json` writes
//! human-readable JSON, anything else writes compact bincode. Both formats
//! round-trip the mapping exactly, including entry order and list order.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::confusion::ConfusionSet;
use crate::error::{NhamlanError, Result};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Write a confusion set to `path`.
///
/// Fails fast on I/O or serialization errors; no partial output is cleaned
/// up or recovered.
pub fn save_confusion_set<P: AsRef<Path>>(set: &ConfusionSet, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    if is_json(path) {
        serde_json::to_writer_pretty(writer, set)?;
    } else {
        bincode::serialize_into(writer, set)
            .map_err(|e| NhamlanError::serialization(e.to_string()))?;
    }

    Ok(())
}

/// Read a confusion set back from `path`, using the same extension rule as
/// [`save_confusion_set`].
pub fn load_confusion_set<P: AsRef<Path>>(path: P) -> Result<ConfusionSet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let set = if is_json(path) {
        serde_json::from_reader(reader)?
    } else {
        bincode::deserialize_from(reader)
            .map_err(|e| NhamlanError::serialization(e.to_string()))?
    };

    Ok(set)
}
