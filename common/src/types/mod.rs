pub mod buffers;
pub mod translation;

pub use buffers::SampleBuffer;
pub use translation::{Translation, TranslationCollection};
