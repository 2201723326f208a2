/// Initial capacity reserved by a new `SampleBuffer`.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64;

/// Buffer size meaning "no size limit".
pub const UNBOUNDED_BUFFER_SIZE: usize = 0;
