pub mod buffer;
pub mod spreadsheet;
pub mod translation;

pub use crate::traits::buffer::DataBuffer;
pub use crate::traits::spreadsheet::{SheetPort, WorkbookPort};
pub use crate::traits::translation::Translator;
