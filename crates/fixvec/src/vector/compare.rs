//! Experimental lexicographic ordering (enabled by the `experimental-compare` feature).

use std::cmp::Ordering;

use super::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Compares `self` with a vector of possibly different dimension and element type.
    ///
    /// Vectors with fewer dimensions order first. Vectors of equal dimension are compared element
    /// by element in index order, and the first non-equal pair decides. Returns [`None`] if two
    /// elements are not comparable (eg. when one of them is `NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// use std::cmp::Ordering;
    ///
    /// let a = Vector2D::new(5, 5);
    /// let b = Vector3D::new(1, 1, 1);
    /// assert_eq!(a.lex_cmp(&b), Some(Ordering::Less));
    /// assert_eq!(b.lex_cmp(&Vector3D::new(1, 2, 0)), Some(Ordering::Less));
    /// ```
    pub fn lex_cmp<U, const M: usize>(&self, other: &FixedVector<U, M>) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        if N != M {
            return Some(N.cmp(&M));
        }

        for (a, b) in self.iter().zip(other) {
            match a.partial_cmp(b)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.lex_cmp(other)
    }
}

impl<T: Ord, const N: usize> Ord for FixedVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
