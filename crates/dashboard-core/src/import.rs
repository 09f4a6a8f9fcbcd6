// File: crates/dashboard-core/src/import.rs
// Summary: Build a column-major payload from a headed CSV/TSV export.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ReshapeError, Result};
use crate::payload::TabularPayload;

/// Read a headed CSV. The first `x_columns` columns become x columns (column 0
/// is the key), the remaining columns become y series. Cells are kept as text.
pub fn from_csv_reader<R: Read>(reader: R, x_columns: usize) -> Result<TabularPayload> {
    from_delimited_reader(reader, b',', x_columns)
}

/// Same as [`from_csv_reader`] with an explicit delimiter (e.g. `b'\t'`).
pub fn from_delimited_reader<R: Read>(reader: R, delimiter: u8, x_columns: usize) -> Result<TabularPayload> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if x_columns == 0 || headers.is_empty() {
        return Err(ReshapeError::MissingKeyColumn);
    }
    let split = x_columns.min(headers.len());

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            return Err(ReshapeError::RaggedRow { row, expected: headers.len(), actual: record.len() });
        }
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            column.push(cell.to_string());
        }
    }
    debug!(rows = columns[0].len(), columns = headers.len(), x_columns = split, "imported delimited data");

    let y_values = columns.split_off(split);
    let mut x_headers = headers;
    let y_headers = x_headers.split_off(split);
    Ok(TabularPayload::new(x_headers, columns, y_headers, y_values))
}

/// Open `path` and read it with [`from_delimited_reader`]; `.tsv` files use tabs.
pub fn from_path(path: impl AsRef<Path>, x_columns: usize) -> Result<TabularPayload> {
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    from_delimited_reader(file, delimiter, x_columns)
}
