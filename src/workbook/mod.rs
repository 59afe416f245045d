// Workbook module: the only code that talks to the spreadsheet format.

pub mod exporter;
pub mod reader;

// Re-export the boundary entry points for ease of use.
pub use exporter::{XLSX_MIME, write_workbook};
pub use reader::read_table;
