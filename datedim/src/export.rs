//! CSV export.
//!
//! Any serializable row type can be written; the header row comes from the
//! field names, so column order follows the row struct.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

/// Write `rows` as CSV, header first.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `rows` as CSV to the file at `path`, replacing it.
pub fn write_csv_file<T: Serialize>(path: &Path, rows: &[T]) -> csv::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), rows)
}
