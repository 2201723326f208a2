pub mod sample_buffer;

pub use crate::types::buffers::sample_buffer::SampleBuffer;
