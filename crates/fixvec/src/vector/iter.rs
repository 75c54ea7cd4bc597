//! Iteration over vector elements.
//!
//! All iterators visit the elements in index order, support reverse iteration via
//! [`DoubleEndedIterator`], and know their exact length. Every call creates a fresh traversal.

use std::{array, slice};

use super::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Returns an iterator over references to the elements, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let v = Vector3D::new(1, 2, 3);
    /// assert!(v.iter().copied().eq([1, 2, 3]));
    /// assert!(v.iter().rev().copied().eq([3, 2, 1]));
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedVector;

    #[test]
    fn forward_and_reverse() {
        let v = FixedVector::from([1.5, 2.5, 3.5, 4.5]);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1.5, 2.5, 3.5, 4.5]);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [4.5, 3.5, 2.5, 1.5]);
        assert_eq!(v.into_iter().rev().collect::<Vec<_>>(), [4.5, 3.5, 2.5, 1.5]);
        assert_eq!(v.iter().len(), 4);
    }

    #[test]
    fn restartable() {
        let v = FixedVector::from([1, 2, 3]);
        let first: i32 = v.iter().sum();
        let second: i32 = (&v).into_iter().sum();
        assert_eq!(first, second);
    }

    #[test]
    fn mutate_through_iterator() {
        let mut v = FixedVector::from([1, 2, 3]);
        for elem in &mut v {
            *elem *= 2;
        }
        assert_eq!(v, [2, 4, 6]);
    }

    #[test]
    fn empty() {
        let v = FixedVector::<u8, 0>::ZERO;
        assert_eq!(v.iter().next(), None);
        assert_eq!(v.iter().next_back(), None);
    }
}
