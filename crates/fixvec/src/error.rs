/// Error returned by the bounds-checked element accessors of
/// [`FixedVector`][crate::FixedVector].
///
/// This is the only error produced by the library. Numeric edge cases (normalizing a zero vector,
/// dividing by zero) follow the native behavior of the element type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of range for a vector with {len} dimensions")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The number of dimensions of the vector.
    pub len: usize,
}
