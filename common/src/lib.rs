//! General functionality shared by the `phyphox-export` workspace
//!
//! Holds the data model the export core reads from: sample buffers, translation lookups and the
//! spreadsheet ports a workbook implementation has to provide.

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{DataBuffer, SheetPort, Translator, WorkbookPort};

// Re-export types
#[doc(inline)]
pub use types::{buffers, SampleBuffer, Translation, TranslationCollection};
