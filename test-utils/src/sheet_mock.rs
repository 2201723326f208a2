use common::{SheetPort, WorkbookPort};

/// Single write received by a `SheetMock`.
#[derive(Clone, Debug, PartialEq)]
pub enum MockValue {
    Text(String),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellWrite {
    pub row: u32,
    pub column: u32,
    pub value: MockValue,
}

/// Sheet that records every write in call order.
#[derive(Clone, Debug, Default)]
pub struct SheetMock {
    pub name: String,
    pub writes: Vec<CellWrite>,
}

impl SheetMock {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            writes: Vec::new(),
        }
    }

    /// Writes made to `row`, in call order.
    pub fn row(&self, row: u32) -> Vec<&CellWrite> {
        self.writes.iter().filter(|w| w.row == row).collect()
    }

    pub fn was_written(&self, row: u32, column: u32) -> bool {
        self.writes
            .iter()
            .any(|w| w.row == row && w.column == column)
    }
}

impl SheetPort for SheetMock {
    fn set_text(&mut self, row: u32, column: u32, value: &str) {
        self.writes.push(CellWrite {
            row,
            column,
            value: MockValue::Text(value.to_string()),
        });
    }

    fn set_number(&mut self, row: u32, column: u32, value: f64) {
        self.writes.push(CellWrite {
            row,
            column,
            value: MockValue::Float(value),
        });
    }
}

/// Workbook handing out `SheetMock`s.
#[derive(Clone, Debug, Default)]
pub struct WorkbookMock {
    pub sheets: Vec<SheetMock>,
}

impl WorkbookMock {
    pub fn new() -> Self {
        Self { sheets: vec![] }
    }
}

impl WorkbookPort for WorkbookMock {
    type Sheet = SheetMock;

    fn work_sheet(&mut self, name: &str) -> &mut SheetMock {
        self.sheets.push(SheetMock::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }
}
