use std::collections::VecDeque;

use crate::constants::{DEFAULT_BUFFER_CAPACITY, UNBOUNDED_BUFFER_SIZE};
use crate::traits::DataBuffer;

/// Named buffer of experiment samples. A buffer with a `size` other than zero keeps at most
/// `size` slots: when it is full, pushing a new slot pops the oldest one out.
/// Slots hold `None` when the sample was never recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    name: String,
    size: usize,
    buffer: VecDeque<Option<f64>>,
}

impl SampleBuffer {
    /// Creates a new empty buffer called `name` holding at most `size` slots (0 for no limit).
    pub fn new(name: &str, size: usize) -> Self {
        let capacity = if size == UNBOUNDED_BUFFER_SIZE {
            DEFAULT_BUFFER_CAPACITY
        } else {
            size
        };
        Self {
            name: name.to_string(),
            size,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Creates an unbounded buffer filled with `values`.
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        let mut buffer = Self::new(name, UNBOUNDED_BUFFER_SIZE);
        buffer.extend(values.iter().copied());
        buffer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Appends a recorded sample. Returns the slot popped out if the buffer was full.
    pub fn push(&mut self, value: f64) -> Option<Option<f64>> {
        self.push_slot(Some(value))
    }

    /// Appends a slot whose sample was never recorded.
    pub fn push_gap(&mut self) -> Option<Option<f64>> {
        self.push_slot(None)
    }

    fn push_slot(&mut self, slot: Option<f64>) -> Option<Option<f64>> {
        let out = if self.size != UNBOUNDED_BUFFER_SIZE && self.buffer.len() >= self.size {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(slot);
        out
    }

    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the most recent recorded sample.
    pub fn last(&self) -> Option<f64> {
        self.buffer.iter().rev().find_map(|slot| *slot)
    }

    /// Returns an iterator over the stored slots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.buffer.iter().copied()
    }
}

impl DataBuffer for SampleBuffer {
    fn object_at_index(&self, index: usize) -> Option<f64> {
        self.buffer.get(index).copied().flatten()
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }
}
