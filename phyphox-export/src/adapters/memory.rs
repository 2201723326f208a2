use std::collections::BTreeMap;

use common::{SheetPort, WorkbookPort};

/// Content of a single worksheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            Cell::Number(_) => None,
        }
    }
}

/// Sparse in-memory worksheet. Only written cells are stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySheet {
    name: String,
    cells: BTreeMap<(u32, u32), Cell>,
}

impl MemorySheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell(&self, row: u32, column: u32) -> Option<&Cell> {
        self.cells.get(&(row, column))
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows up to and including the last written one.
    pub fn rows(&self) -> u32 {
        self.cells
            .keys()
            .next_back()
            .map_or(0, |(row, _)| row + 1)
    }

    /// Number of columns up to and including the right-most written one.
    pub fn columns(&self) -> u32 {
        self.cells
            .keys()
            .map(|(_, column)| column + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates written cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells
            .iter()
            .map(|((row, column), cell)| (*row, *column, cell))
    }
}

impl SheetPort for MemorySheet {
    fn set_text(&mut self, row: u32, column: u32, value: &str) {
        self.cells
            .insert((row, column), Cell::Text(value.to_string()));
    }

    fn set_number(&mut self, row: u32, column: u32, value: f64) {
        self.cells.insert((row, column), Cell::Number(value));
    }
}

/// Ordered collection of in-memory worksheets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    pub fn sheets(&self) -> &[MemorySheet] {
        &self.sheets
    }

    /// Returns the first sheet called `name`.
    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl WorkbookPort for MemoryWorkbook {
    type Sheet = MemorySheet;

    fn work_sheet(&mut self, name: &str) -> &mut MemorySheet {
        self.sheets.push(MemorySheet::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet() {
        let sheet = MemorySheet::new("Raw Data");
        assert_eq!(sheet.name(), "Raw Data");
        assert!(sheet.is_empty());
        assert_eq!(sheet.rows(), 0);
        assert_eq!(sheet.columns(), 0);
    }

    #[test]
    fn test_sparse_cells() {
        let mut sheet = MemorySheet::new("Raw Data");
        sheet.set_text(0, 0, "Time (s)");
        sheet.set_number(3, 2, 0.0);

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows(), 4);
        assert_eq!(sheet.columns(), 3);
        assert_eq!(sheet.cell(0, 0).and_then(Cell::as_text), Some("Time (s)"));
        assert_eq!(sheet.cell(3, 2).and_then(Cell::as_number), Some(0.0));
        assert_eq!(sheet.cell(1, 0), None);
    }

    #[test]
    fn test_overwrite_cell() {
        let mut sheet = MemorySheet::new("Raw Data");
        sheet.set_text(1, 1, "x");
        sheet.set_number(1, 1, 2.0);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.cell(1, 1), Some(&Cell::Number(2.0)));
    }

    #[test]
    fn test_workbook_appends_sheets() {
        let mut workbook = MemoryWorkbook::new();
        workbook.work_sheet("Accelerometer").set_number(1, 0, 9.81);
        workbook.work_sheet("Gyroscope");

        assert_eq!(workbook.len(), 2);
        assert_eq!(workbook.sheets()[0].name(), "Accelerometer");
        assert_eq!(
            workbook
                .sheet("Accelerometer")
                .and_then(|sheet| sheet.cell(1, 0))
                .and_then(Cell::as_number),
            Some(9.81)
        );
        assert!(workbook.sheet("Gyroscope").unwrap().is_empty());
        assert!(workbook.sheet("Magnetometer").is_none());
    }
}
