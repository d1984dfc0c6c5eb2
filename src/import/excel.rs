//! Workbook reading via calamine.
//!
//! The rest of the pipeline treats this as an opaque capability: a file
//! path and a zero-based sheet index in, rows of primitive cell values out.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::{Result, SqlGenError};
use crate::import::Cell;

/// Read one sheet of a workbook as rows of primitive cell values, row 0
/// first.
pub fn read_sheet(path: &Path, index: usize) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SqlGenError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names().to_vec();
    debug!(sheets = names.len(), path = %path.display(), "opened workbook");

    let name = names
        .get(index)
        .ok_or_else(|| SqlGenError::SheetIndex { index, path: path.to_path_buf() })?
        .clone();
    let range = workbook.worksheet_range(&name).map_err(|e| SqlGenError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect())
}

fn cell_value(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Str(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Str(b.to_string()),
        Data::DateTime(dt) => Cell::Str(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Str(s.clone()),
        Data::Error(e) => Cell::Str(format!("{e:?}")),
    }
}
