use std::{fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::gtfs;

/// Writes `rows` as a header-bearing csv file, creating missing parent
/// directories. `None` fields are written as empty cells.
pub fn write_csv<T, P>(path: P, rows: &[T]) -> Result<(), gtfs::Error>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Reads a table previously written by [write_csv].
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, gtfs::Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record?;
        rows.push(row);
    }
    Ok(rows)
}
