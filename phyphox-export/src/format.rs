use serde::{Deserialize, Serialize};

use crate::errors::ExportError;

const CSV_EXTENSION: &str = "csv";
const SPREADSHEET_EXTENSION: &str = "xlsx";

/// Output format of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFileFormat {
    /// Delimited text. Numbers use `decimal_point` as decimal marker.
    Csv {
        separator: char,
        decimal_point: char,
    },
    /// One worksheet per export set.
    Spreadsheet,
}

/// Formats offered to the user, in display order.
pub const EXPORT_TYPES: [(&str, ExportFileFormat); 6] = [
    ("Excel", ExportFileFormat::Spreadsheet),
    ("CSV (Comma, decimal point)", ExportFileFormat::csv(',', '.')),
    ("CSV (Tabulator, decimal point)", ExportFileFormat::csv('\t', '.')),
    ("CSV (Semicolon, decimal point)", ExportFileFormat::csv(';', '.')),
    ("CSV (Tabulator, decimal comma)", ExportFileFormat::csv('\t', ',')),
    ("CSV (Semicolon, decimal comma)", ExportFileFormat::csv(';', ',')),
];

impl ExportFileFormat {
    pub const fn csv(separator: char, decimal_point: char) -> Self {
        Self::Csv {
            separator,
            decimal_point,
        }
    }

    pub fn is_csv(&self) -> bool {
        matches!(self, Self::Csv { .. })
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Csv { .. } => CSV_EXTENSION,
            Self::Spreadsheet => SPREADSHEET_EXTENSION,
        }
    }

    /// Returns the catalog label of this format, if it is one of the presets.
    pub fn label(&self) -> Option<&'static str> {
        EXPORT_TYPES
            .iter()
            .find(|(_, format)| format == self)
            .map(|(label, _)| *label)
    }

    /// Looks a format up by its catalog label.
    /// Returns UnknownFormat error if no preset carries that label.
    pub fn from_label(label: &str) -> Result<Self, ExportError> {
        EXPORT_TYPES
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, format)| *format)
            .ok_or_else(|| ExportError::UnknownFormat(label.to_string()))
    }

    /// Parses a format from its JSON form, e.g. `"spreadsheet"` or
    /// `{"csv": {"separator": ";", "decimal_point": ","}}`.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let format: Self = serde_json::from_str(json)?;
        format.validate()?;
        Ok(format)
    }

    /// Checks that the separator can be written as a single byte.
    pub fn validate(&self) -> Result<(), ExportError> {
        match self {
            Self::Csv { separator, .. } if !separator.is_ascii() => {
                Err(ExportError::InvalidSeparator(*separator))
            }
            _ => Ok(()),
        }
    }
}
