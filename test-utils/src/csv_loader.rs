use std::error::Error;

use csv::ReaderBuilder;

/// Exported CSV read back into header names and numeric rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl ExportedTable {
    /// Values of column `column`, one per data row.
    pub fn column(&self, column: usize) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.get(column).copied().flatten()).collect()
    }
}

/// Parses a single exported value. Empty fields are missing samples.
pub fn parse_value(field: &str, decimal_point: char) -> Result<Option<f64>, Box<dyn Error>> {
    if field.is_empty() {
        return Ok(None);
    }
    let normalized = field.replace(decimal_point, ".");
    normalized
        .parse::<f64>()
        .map(Some)
        .map_err(|e| format!("Invalid value '{}': {}", field, e).into())
}

/// Reads CSV bytes written with `separator` and `decimal_point`.
pub fn load_export(
    data: &[u8],
    separator: char,
    decimal_point: char,
) -> Result<ExportedTable, Box<dyn Error>> {
    if !separator.is_ascii() {
        return Err(format!("Separator {:?} is not ASCII", separator).into());
    }
    let mut rdr = ReaderBuilder::new()
        .delimiter(separator as u8)
        .has_headers(true)
        .from_reader(data);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = record
            .iter()
            .map(|field| parse_value(field, decimal_point))
            .collect::<Result<Vec<Option<f64>>, Box<dyn Error>>>()?;
        rows.push(row);
    }

    Ok(ExportedTable { headers, rows })
}

/// Splits exported CSV into its raw lines, quotes included.
pub fn raw_lines(data: &[u8]) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::str::from_utf8(data)?;
    Ok(text.split('\n').map(str::to_string).collect())
}
