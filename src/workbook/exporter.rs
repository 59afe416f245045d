// Excel emission: harmonized table → single-sheet workbook bytes.
use rust_xlsxwriter::Workbook;

use crate::harmonizer::{CANONICAL_COLUMN, LINK_COLUMN};
use crate::model::{ExportError, SheetTable};

/// MIME type advertised for the downloadable workbook buffer.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serializes the harmonized table into an in-memory `.xlsx` workbook with
/// a single named sheet: header row first, then data rows in input order.
/// A table missing either appended column is refused up front so a
/// half-harmonized artifact can never be produced.
pub fn workbook_bytes(table: &SheetTable, sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    for required in [CANONICAL_COLUMN, LINK_COLUMN] {
        if table.column_index(required).is_none() {
            return Err(ExportError::MissingColumn(required.to_string()));
        }
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(sheet_name)
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, header)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet
                .write_string(row_idx as u32 + 1, col as u16, value)
                .map_err(|e| ExportError::Workbook(e.to_string()))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Workbook(e.to_string()))
}

/// Writes the workbook to disk. The buffer is scoped to this call and
/// released after emission.
pub fn write_workbook(table: &SheetTable, sheet_name: &str, path: &str) -> Result<(), ExportError> {
    let bytes = workbook_bytes(table, sheet_name)?;
    std::fs::write(path, bytes).map_err(|e| ExportError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Reader, open_workbook_auto_from_rs};

    use super::*;
    use crate::harmonizer::harmonize;
    use crate::workbook::reader::table_from_range;

    fn harmonized_fixture() -> SheetTable {
        let mut input = SheetTable::new(vec!["Ref".to_string(), "Modele".to_string()]);
        input.push_row(vec!["a-1".to_string(), "Dell Latitude-5400".to_string()]);
        input.push_row(vec!["a-2".to_string(), String::new()]);
        input.push_row(vec!["a-3".to_string(), "HP EliteBook 840".to_string()]);
        harmonize(&input, "Modele", None).unwrap().table
    }

    #[test]
    fn refuses_tables_missing_the_appended_columns() {
        let mut bare = SheetTable::new(vec!["Ref".to_string(), "Modele".to_string()]);
        bare.push_row(vec!["a-1".to_string(), "Latitude 5400".to_string()]);
        let err = workbook_bytes(&bare, "Harmonized").unwrap_err();
        assert!(matches!(err, ExportError::MissingColumn(col) if col == CANONICAL_COLUMN));
    }

    #[test]
    fn buffer_reads_back_with_identical_cells() {
        let table = harmonized_fixture();
        let bytes = workbook_bytes(&table, "Harmonized").unwrap();

        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Harmonized".to_string()]);
        let range = workbook.worksheet_range("Harmonized").unwrap();
        let reread = table_from_range(&range).unwrap();

        assert_eq!(reread.headers, table.headers);
        assert_eq!(reread.rows, table.rows);
    }
}
