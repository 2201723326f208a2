/// Single worksheet that export sets write cells into.
///
/// Rows and columns are zero based. A cell that is never written stays empty, which a
/// spreadsheet reader can tell apart from a cell holding `0.0`.
pub trait SheetPort {
    /// Writes a string cell.
    fn set_text(&mut self, row: u32, column: u32, value: &str);
    /// Writes a numeric cell.
    fn set_number(&mut self, row: u32, column: u32, value: f64);
}

/// Workbook able to hand out new named worksheets.
pub trait WorkbookPort {
    type Sheet: SheetPort;

    /// Appends a new worksheet called `name` and returns it for writing.
    fn work_sheet(&mut self, name: &str) -> &mut Self::Sheet;
}
