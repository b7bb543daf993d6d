//! The mutable list of values being sorted.
//!
//! Engines only ever read, write and swap through [`SequenceStore`], so the
//! store always holds a permutation of the values it was built with.

use rand::Rng;

/// Numeric value held by a [`SequenceStore`].
pub type Value = i64;

/// Fixed-length, indexable list of values.
///
/// Indexing out of bounds is a contract violation by the caller and panics
/// like slice indexing does; the engines never issue one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceStore {
    values: Vec<Value>,
}

impl SequenceStore {
    /// Store holding exactly `values`, in order.
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Store holding `0..length` ascending.
    #[must_use]
    pub fn ascending(length: usize) -> Self {
        Self {
            values: (0..length as Value).collect(),
        }
    }

    /// Value at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Value {
        self.values[index]
    }

    /// Overwrite the value at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    /// Exchange the values at `a` and `b`. `a == b` is a valid no-op swap.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Number of values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the current values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Index of the first value equal to `value`, if any.
    #[must_use]
    pub fn position_of(&self, value: Value) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// Smallest value, or `None` when empty.
    #[must_use]
    pub fn min(&self) -> Option<Value> {
        self.values.iter().copied().min()
    }

    /// Largest value, or `None` when empty.
    #[must_use]
    pub fn max(&self) -> Option<Value> {
        self.values.iter().copied().max()
    }

    /// Whether the values are in ascending (non-decreasing) order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Normalized height of the value at `index` in `[0, 1]`:
    /// `(value - min) / (max - min)`. All-equal sequences map to `0.0`.
    #[must_use]
    pub fn ratio(&self, index: usize) -> f32 {
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return 0.0;
        };
        ratio_between(self.values[index], min, max)
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle by exchanging every position with a uniformly random one.
    ///
    /// Not an unbiased Fisher-Yates, but every permutation is reachable.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.values.len();
        for i in 0..len {
            let other = rng.random_range(0..len);
            self.values.swap(i, other);
        }
    }
}

impl From<Vec<Value>> for SequenceStore {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

/// `(value - min) / (max - min)`, or `0.0` when the range is empty.
#[must_use]
pub fn ratio_between(value: Value, min: Value, max: Value) -> f32 {
    if max <= min {
        return 0.0;
    }
    let offset = i128::from(value) - i128::from(min);
    let span = i128::from(max) - i128::from(min);
    (offset as f64 / span as f64) as f32
}
