use std::sync::Arc;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, warn};

use common::{
    DataBuffer, SampleBuffer, SheetPort, TranslationCollection, Translator, WorkbookPort,
};

use crate::adapters::memory::MemorySheet;
use crate::errors::ExportError;
use crate::format::ExportFileFormat;
use crate::number::format_scientific;

const ROW_TERMINATOR: u8 = b'\n';
const EMPTY_VALUE: &str = "\"\"";

/// One named channel of an export set. The buffer is shared with the experiment that records it.
#[derive(Debug)]
pub struct ExportColumn<B = SampleBuffer> {
    pub name: String,
    pub buffer: Arc<B>,
}

impl<B> ExportColumn<B> {
    pub fn new(name: &str, buffer: Arc<B>) -> Self {
        Self {
            name: name.to_string(),
            buffer,
        }
    }
}

impl<B> Clone for ExportColumn<B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Columns match if they carry the same raw name and the same buffer, either the very same
/// shared buffer or one with equal content.
impl<B: PartialEq> PartialEq for ExportColumn<B> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && (Arc::ptr_eq(&self.buffer, &other.buffer) || self.buffer == other.buffer)
    }
}

/// Result of serializing an export set.
#[derive(Clone, Debug, PartialEq)]
pub enum Serialized {
    /// UTF-8 encoded delimited text.
    Csv(Vec<u8>),
    /// Worksheet named after the localized set name.
    Sheet(MemorySheet),
}

/// Named group of buffers exported together, e.g. one sheet or one CSV file.
///
/// Names are stored raw and only localized while serializing.
#[derive(Debug)]
pub struct ExportSet<B = SampleBuffer, T = TranslationCollection> {
    name: String,
    columns: Vec<ExportColumn<B>>,
    translation: Option<Arc<T>>,
}

impl<B, T> Clone for ExportSet<B, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            columns: self.columns.clone(),
            translation: self.translation.clone(),
        }
    }
}

impl<B: PartialEq, T: PartialEq> PartialEq for ExportSet<B, T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.translation == other.translation
            && self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|(l, r)| l == r)
    }
}

impl<B: DataBuffer, T: Translator> ExportSet<B, T> {
    pub fn new(name: &str, columns: Vec<ExportColumn<B>>, translation: Option<Arc<T>>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            translation,
        }
    }

    /// Raw, untranslated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ExportColumn<B>] {
        &self.columns
    }

    pub fn translation(&self) -> Option<&T> {
        self.translation.as_deref()
    }

    fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        match &self.translation {
            Some(translation) => translation.localize(key),
            None => key,
        }
    }

    pub fn localized_name(&self) -> &str {
        self.localize(&self.name)
    }

    /// Returns the columns with their names localized. Stored names are left untouched.
    pub fn localized_columns(&self) -> Vec<(&str, &B)> {
        self.columns
            .iter()
            .map(|column| (self.localize(&column.name), column.buffer.as_ref()))
            .collect()
    }

    /// Samples of data row `index` (0 based, the header not counted), one per column.
    /// Returns `None` once no column holds a sample at that index.
    fn data_row(&self, index: usize) -> Option<Vec<Option<f64>>> {
        let row: Vec<Option<f64>> = self
            .columns
            .iter()
            .map(|column| column.buffer.object_at_index(index))
            .collect();
        row.iter().any(Option::is_some).then_some(row)
    }

    /// Data rows in export order. The scan stops at the first row where every column is empty,
    /// even if some buffer holds samples further on.
    fn data_rows(&self) -> impl Iterator<Item = Vec<Option<f64>>> + '_ {
        (0..).map_while(move |index| self.data_row(index))
    }

    /// Returns `(rows_written, longest buffer)` if some column still holds samples past the
    /// last row written.
    fn dropped_samples(&self, rows_written: usize) -> Option<(usize, usize)> {
        let dropped = self.columns.iter().any(|column| {
            (rows_written..column.buffer.len())
                .any(|index| column.buffer.object_at_index(index).is_some())
        });
        if !dropped {
            return None;
        }
        let longest = self
            .columns
            .iter()
            .map(|column| column.buffer.len())
            .max()
            .unwrap_or(0);
        Some((rows_written, longest))
    }

    fn warn_if_truncated(&self, rows_written: usize) {
        if let Some((rows_written, longest)) = self.dropped_samples(rows_written) {
            warn!(
                "Export set '{}' stopped at an empty row: {} of {} rows written",
                self.name, rows_written, longest
            );
        }
    }

    /// Serializes the set into `format`.
    ///
    /// Returns `None` if there is nothing to export, i.e. the set has no columns and the format
    /// is CSV.
    pub fn serialize(&self, format: &ExportFileFormat) -> Result<Option<Serialized>, ExportError> {
        match *format {
            ExportFileFormat::Csv {
                separator,
                decimal_point,
            } => Ok(self
                .serialize_csv(separator, decimal_point)?
                .map(Serialized::Csv)),
            ExportFileFormat::Spreadsheet => {
                let mut sheet = MemorySheet::new(self.localized_name());
                self.write_sheet(&mut sheet);
                Ok(Some(Serialized::Sheet(sheet)))
            }
        }
    }

    /// Writes the set as delimited text.
    ///
    /// The header holds the quoted localized column names. Each following line holds one sample
    /// per column, written with `format_scientific`, or `""` where the column has no sample.
    /// Lines are separated by `\n` with no trailing line break.
    pub fn serialize_csv(
        &self,
        separator: char,
        decimal_point: char,
    ) -> Result<Option<Vec<u8>>, ExportError> {
        if self.columns.is_empty() {
            return Ok(None);
        }
        if !separator.is_ascii() {
            return Err(ExportError::InvalidSeparator(separator));
        }

        // fields are quoted by hand: headers always, numbers never
        let mut writer = WriterBuilder::new()
            .delimiter(separator as u8)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(ROW_TERMINATOR))
            .from_writer(Vec::new());

        writer.write_record(
            self.localized_columns()
                .iter()
                .map(|(name, _)| format!("\"{}\"", name)),
        )?;

        let mut rows_written = 0;
        for row in self.data_rows() {
            writer.write_record(row.iter().map(|value| match value {
                Some(value) => format_scientific(*value, decimal_point),
                None => EMPTY_VALUE.to_string(),
            }))?;
            rows_written += 1;
        }

        let mut data = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        if data.last() == Some(&ROW_TERMINATOR) {
            data.pop();
        }

        debug!(
            "Serialized export set '{}' to csv: {} rows, {} bytes",
            self.name,
            rows_written,
            data.len()
        );
        self.warn_if_truncated(rows_written);

        Ok((!data.is_empty()).then_some(data))
    }

    /// Writes the set into `sheet`: localized names in row 0, samples from row 1 on.
    /// Missing samples leave their cell unwritten.
    pub fn write_sheet<S: SheetPort + ?Sized>(&self, sheet: &mut S) {
        for (column, (name, _)) in self.localized_columns().iter().enumerate() {
            sheet.set_text(0, column as u32, name);
        }

        let mut rows_written = 0;
        for (index, row) in self.data_rows().enumerate() {
            for (column, value) in row.into_iter().enumerate() {
                if let Some(value) = value {
                    sheet.set_number(index as u32 + 1, column as u32, value);
                }
            }
            rows_written += 1;
        }

        debug!(
            "Serialized export set '{}' to sheet: {} rows",
            self.name, rows_written
        );
        self.warn_if_truncated(rows_written);
    }

    /// Adds a sheet named after the localized set name to `workbook` and fills it.
    pub fn serialize_to_workbook<'w, W: WorkbookPort>(
        &self,
        workbook: &'w mut W,
    ) -> &'w mut W::Sheet {
        let sheet = workbook.work_sheet(self.localized_name());
        self.write_sheet(&mut *sheet);
        sheet
    }
}
