//! # Crate phyphox-export
//!
//! ## phyphox-export
//!
//! The `phyphox-export` crate turns the data buffers recorded by a [`phyphox`](https://phyphox.org/)
//! experiment into files the user can take away. Buffers are grouped into named export sets, and
//! each set is written either as delimited text or as a worksheet.
//!
//! Features include:
//! - CSV output with a configurable column separator and decimal marker.
//! - Spreadsheet output through the `WorkbookPort` trait, with an in-memory workbook provided.
//! - Localized set and column names through any `Translator`.
//! - Numbers written with 10 significant digits in scientific notation.
//!
//! **NOTE** Rows are exported until the first row in which no buffer holds a sample. Samples
//! recorded after such a gap are not exported.

pub mod adapters;
pub mod errors;
pub mod experiment;
pub mod export_set;
pub mod format;
pub mod number;

pub use adapters::memory::{Cell, MemorySheet, MemoryWorkbook};
pub use errors::ExportError;
pub use experiment::{Experiment, ExperimentExport, ExportFile};
pub use export_set::{ExportColumn, ExportSet, Serialized};
pub use format::{ExportFileFormat, EXPORT_TYPES};
pub use number::format_scientific;
