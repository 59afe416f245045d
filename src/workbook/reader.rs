// Excel ingestion: first worksheet of an .xlsx/.xls file → SheetTable.
use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::model::{IngestError, SheetTable};

/// Reads the first worksheet of a workbook into a table. The first row is
/// taken as the header row; every cell is stringified.
pub fn read_table(path: &str) -> Result<SheetTable, IngestError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| IngestError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoSheet)?
        .map_err(|e| IngestError::Workbook(e.to_string()))?;
    table_from_range(&range)
}

/// Builds a `SheetTable` from a cell range. Shared by the file reader and
/// the buffer round-trip in the exporter tests.
pub(crate) fn table_from_range(range: &Range<Data>) -> Result<SheetTable, IngestError> {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or(IngestError::MissingHeader)?
        .iter()
        .map(cell_to_string)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader);
    }

    let mut table = SheetTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
    }
    Ok(table)
}

/// Stringifies one cell. Blank cells become empty strings; integral floats
/// drop the `.0` Excel would otherwise leak into model names.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
