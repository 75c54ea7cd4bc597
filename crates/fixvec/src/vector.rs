use std::{array, fmt};

use itertools::Itertools;

use crate::{
    traits::{Number, Sqrt, ToFloat},
    OutOfRange, Zero,
};

mod approx_eq;
#[cfg(feature = "experimental-compare")]
mod compare;
mod iter;
mod ops;

/// An `N`-dimensional vector storing elements of type `T`.
///
/// The dimension is part of the type, so mixing vectors of different dimensions in an arithmetic
/// operation is a compile-time error rather than something that has to be checked at runtime.
///
/// # Construction
///
/// - [`FixedVector::zero`], [`FixedVector::ZERO`] and the [`Default`] impl create a vector with
///   every element set to 0.
/// - [`FixedVector::from_values`] fills the vector from an ordered list of values. Missing values
///   are filled with 0, extra values are ignored.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`FixedVector::splat`] and [`FixedVector::from_fn`] are available for programmatic
///   construction.
/// - [`Vector2D::new`][crate::Vector2D] and [`Vector3D::new`][crate::Vector3D] create 2- and
///   3-dimensional vectors from their components.
///
/// [`FixedVector`] is [`Copy`] whenever `T` is, so copying a vector always yields an independent
/// instance.
///
/// # Element Access
///
/// There are two ways of indexing a vector, and they differ in how out-of-bounds indices are
/// handled:
///
/// - The [`Index`] and [`IndexMut`] impls are the fast path. Like with arrays, an out-of-bounds
///   index results in a panic. [`FixedVector::get_unchecked`] skips the bounds check entirely.
/// - [`FixedVector::at`], [`FixedVector::at_mut`] and [`FixedVector::set`] are the validated path,
///   and return an [`OutOfRange`] error for invalid indices.
///
/// ```
/// # use fixvec::*;
/// let mut v = FixedVector::from([1, 2, 3]);
/// v[0] = 4;
/// assert_eq!(v[0], 4);
/// assert_eq!(v.at(2), Ok(&3));
/// assert!(v.at(3).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct FixedVector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for FixedVector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for FixedVector<T, N> {}

impl<T: Zero, const N: usize> FixedVector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// Creates a vector with every element set to 0.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a vector from an ordered list of values.
    ///
    /// The first `N` values become the elements of the vector, in order. If fewer than `N` values
    /// are provided, the remaining elements are 0. If more are provided, the rest is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let padded = FixedVector::<f64, 5>::from_values([3.0, 5.0, 2.0]);
    /// assert_eq!(padded, [3.0, 5.0, 2.0, 0.0, 0.0]);
    ///
    /// let truncated = FixedVector::<f64, 5>::from_values([3.0, 5.0, 2.0, 3.5, 6.0, 39.0, 2.0]);
    /// assert_eq!(truncated, [3.0, 5.0, 2.0, 3.5, 6.0]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let mut provided = 0;
        let vector = Self::from_fn(|_| match values.next() {
            Some(value) => {
                provided += 1;
                value
            }
            None => T::ZERO,
        });

        if provided < N {
            log::trace!(
                "zero-filling {} of {} vector elements",
                N - provided,
                N
            );
        } else if values.next().is_some() {
            log::trace!("ignoring values beyond the {} vector elements", N);
        }

        vector
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// The number of dimensions (elements) of this vector type.
    pub const DIMENSIONS: usize = N;

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = FixedVector::<_, 3>::splat(2);
    /// assert_eq!(v, [2, 2, 2]);
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector3D::new(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, Vector3D::new(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> FixedVector<U, N>
    where
        F: FnMut(T) -> U,
    {
        FixedVector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector2D::new(1, 2).zip(Vector2D::new('a', 'b'));
    /// assert_eq!(v, [(1, 'a'), (2, 'b')]);
    /// ```
    pub fn zip<U>(self, other: FixedVector<U, N>) -> FixedVector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        FixedVector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns the number of dimensions of this vector.
    ///
    /// This is always `N`, and is available in `const` contexts.
    #[inline]
    pub const fn num_dimensions(&self) -> usize {
        N
    }

    /// Returns a reference to the element at `index`, or an [`OutOfRange`] error if `index` is not
    /// less than `N`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.0.get(index).ok_or(OutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, or an [`OutOfRange`] error if
    /// `index` is not less than `N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.0.get_mut(index).ok_or(OutOfRange { index, len: N })
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// Returns an [`OutOfRange`] error and leaves the vector untouched if `index` is not less than
    /// `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let mut v = Vector2D::new(1, 2);
    /// v.set(1, 5).unwrap();
    /// assert_eq!(v, [1, 5]);
    /// assert_eq!(v.set(2, 5), Err(OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Returns a reference to the element at `index` without performing a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Out-of-bounds indices cause undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.0.get_unchecked(index)
    }

    /// Returns a mutable reference to the element at `index` without performing a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. Out-of-bounds indices cause undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.0.get_unchecked_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`FixedVector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the vector unchanged.
    ///
    /// This is the counterpart of negation (`-v`), and mostly useful in generic code and
    /// expressions mirroring mathematical notation (`+v`).
    #[inline]
    pub fn identity(self) -> Self {
        self
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let a = Vector2D::new(2, 5);
    /// let b = Vector2D::new(-3, -4);
    /// assert_eq!(a.dot(b), -26);
    /// assert_eq!(b.dot(a), -26);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// Integer elements are promoted to [`f64`] before squaring, so the result is a
    /// floating-point number for every element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// assert_eq!(Vector2D::new(3i32, 4).magnitude(), 5.0);
    /// assert_eq!(Vector3D::new(2.0f32, -3.0, -6.0).magnitude(), 7.0);
    /// ```
    pub fn magnitude(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.0
            .iter()
            .map(|elem| {
                let elem = elem.to_float();
                elem * elem
            })
            .fold(<T::Float as Zero>::ZERO, |acc, sq| acc + sq)
            .sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// If the vector has a magnitude of 0, the result has `NaN` elements. Use
    /// [`FixedVector::is_zero`] to check for that case beforehand.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// assert_eq!(Vector2D::new(3.0f64, 4.0).normalize(), Vector2D::new(0.6, 0.8));
    /// assert_eq!(Vector3D::new(0i32, 0, 4).normalize(), Vector3D::new(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> FixedVector<T::Float, N>
    where
        T: ToFloat,
    {
        let magnitude = self.magnitude();
        self.map(ToFloat::to_float) / magnitude
    }

    /// Returns whether this vector has a magnitude of exactly 0.
    ///
    /// Vectors with 0 dimensions are always zero vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// assert!(FixedVector::<f64, 0>::ZERO.is_zero());
    /// assert!(FixedVector::<i32, 5>::from_values([0]).is_zero());
    /// assert!(!FixedVector::<i32, 5>::from_values([2, 5, 3]).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool
    where
        T: ToFloat,
    {
        self.magnitude() == <T::Float as Zero>::ZERO
    }
}

impl<T: Zero, const N: usize> Default for FixedVector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    #[inline]
    fn from(value: FixedVector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for FixedVector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `<e0, e1, ..., eN>`.
impl<T, const N: usize> fmt::Display for FixedVector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0.iter().format(", "))
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}
