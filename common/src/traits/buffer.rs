/// Ordered sequence of optional `f64` samples recorded by an experiment.
///
/// Implementations are read by position. A slot may be empty either because it lies past the
/// end of the buffer or because the sample was never recorded.
pub trait DataBuffer {
    /// Returns the sample stored at `index`, or `None` if out of range or never recorded.
    fn object_at_index(&self, index: usize) -> Option<f64>;

    /// Returns the number of slots currently stored, recorded or not.
    fn len(&self) -> usize;

    /// Returns true if the buffer holds no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DataBuffer for Vec<f64> {
    fn object_at_index(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl DataBuffer for Vec<Option<f64>> {
    fn object_at_index(&self, index: usize) -> Option<f64> {
        self.get(index).copied().flatten()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
