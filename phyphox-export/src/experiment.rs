use std::sync::Arc;

use log::info;
use unicode_normalization::char::is_combining_mark;

use common::{DataBuffer, SampleBuffer, TranslationCollection, Translator};

use crate::adapters::memory::MemoryWorkbook;
use crate::errors::ExportError;
use crate::export_set::ExportSet;
use crate::format::ExportFileFormat;

/// Single exported file, named after the localized export set.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Everything an experiment exports in one request.
#[derive(Clone, Debug, PartialEq)]
pub enum ExperimentExport {
    /// One CSV file per export set that produced output.
    Files(Vec<ExportFile>),
    /// One worksheet per export set, in set order.
    Workbook(MemoryWorkbook),
}

/// Experiment description together with the data sets it offers for export.
#[derive(Clone, Debug)]
pub struct Experiment<B = SampleBuffer, T = TranslationCollection> {
    pub title: String,
    pub description: String,
    pub category: String,
    translation: Option<Arc<T>>,
    export_sets: Vec<ExportSet<B, T>>,
}

impl<B: DataBuffer, T: Translator> Experiment<B, T> {
    pub fn new(
        title: &str,
        description: &str,
        category: &str,
        translation: Option<Arc<T>>,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            translation,
            export_sets: Vec::new(),
        }
    }

    /// Identifiers are non-empty and made of letters, digits and the marks combined with them.
    pub fn is_valid_identifier(id: &str) -> bool {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_alphanumeric() || is_combining_mark(c))
    }

    pub fn add_export_set(&mut self, set: ExportSet<B, T>) -> &mut Self {
        self.export_sets.push(set);
        self
    }

    pub fn export_sets(&self) -> &[ExportSet<B, T>] {
        &self.export_sets
    }

    pub fn translation(&self) -> Option<&T> {
        self.translation.as_deref()
    }

    pub fn localized_title(&self) -> &str {
        match &self.translation {
            Some(translation) => translation.localize(&self.title),
            None => &self.title,
        }
    }

    /// Exports every set of the experiment in `format`.
    pub fn export(&self, format: &ExportFileFormat) -> Result<ExperimentExport, ExportError> {
        format.validate()?;
        info!(
            "Exporting {} data sets of '{}' as {}",
            self.export_sets.len(),
            self.title,
            format.label().unwrap_or(format.file_extension())
        );

        match *format {
            ExportFileFormat::Csv {
                separator,
                decimal_point,
            } => {
                let mut files = Vec::with_capacity(self.export_sets.len());
                for set in &self.export_sets {
                    if let Some(data) = set.serialize_csv(separator, decimal_point)? {
                        files.push(ExportFile {
                            file_name: format!(
                                "{}.{}",
                                set.localized_name(),
                                format.file_extension()
                            ),
                            data,
                        });
                    }
                }
                Ok(ExperimentExport::Files(files))
            }
            ExportFileFormat::Spreadsheet => {
                let mut workbook = MemoryWorkbook::new();
                for set in &self.export_sets {
                    set.serialize_to_workbook(&mut workbook);
                }
                Ok(ExperimentExport::Workbook(workbook))
            }
        }
    }
}
