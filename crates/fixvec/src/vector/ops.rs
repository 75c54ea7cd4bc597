//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::FixedVector;

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Exact element-wise equality.
///
/// Floating-point callers that need a tolerance should use the [`approx`] traits instead.
impl<T, U, const N: usize> PartialEq<FixedVector<U, N>> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedVector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for FixedVector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<FixedVector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedVector<U, N>) -> bool {
        *self == other.0
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for FixedVector<T, N>
where
    T: Neg,
{
    type Output = FixedVector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add for FixedVector<T, N>
where
    T: Add + Copy,
{
    type Output = FixedVector<T::Output, N>;

    fn add(self, rhs: Self) -> Self::Output {
        FixedVector::from_fn(|i| self[i] + rhs[i])
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign for FixedVector<T, N>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub for FixedVector<T, N>
where
    T: Sub + Copy,
{
    type Output = FixedVector<T::Output, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        FixedVector::from_fn(|i| self[i] - rhs[i])
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign for FixedVector<T, N>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for FixedVector<T, N>
where
    T: Mul + Copy,
{
    type Output = FixedVector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for FixedVector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-Scalar division.
///
/// Dividing by zero behaves like it does for the element type: floating-point elements become
/// infinite or `NaN`, integer division panics.
impl<T, const N: usize> Div<T> for FixedVector<T, N>
where
    T: Div + Copy,
{
    type Output = FixedVector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division.
impl<T, const N: usize> DivAssign<T> for FixedVector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Coherence rules out a blanket `impl<T> Mul<FixedVector<T, N>> for T`, so scalar-on-the-left
// multiplication is implemented for the primitive types only.
macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<FixedVector<$types, N>> for $types {
                type Output = FixedVector<$types, N>;

                fn mul(self, rhs: FixedVector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// NB: element-wise vector-vector multiplication and division are deliberately missing: `v * w`
// reads like a dot or cross product, and both of those have named methods.

#[cfg(test)]
mod tests {
    use crate::{FixedVector, Vector2D, Vector3D};

    #[test]
    fn arithmetic() {
        let a = Vector3D::new(1i32, 2, 3);
        let b = Vector3D::new(-4, 0, 9);
        assert_eq!(a + b, [-3, 2, 12]);
        assert_eq!(a - b, [5, 2, -6]);
        assert_eq!(a * 3, [3, 6, 9]);
        assert_eq!(3 * a, [3, 6, 9]);
        assert_eq!(b / 2, [-2, 0, 4]);
        assert_eq!(-a, [-1, -2, -3]);
        assert_eq!(a.identity(), a);
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vector2D::new(1.0f64, 2.0);
        v += Vector2D::new(0.5, 0.5);
        assert_eq!(v, [1.5, 2.5]);
        v -= Vector2D::new(1.5, 0.5);
        assert_eq!(v, [0.0, 2.0]);
        v *= 4.0;
        assert_eq!(v, [0.0, 8.0]);
        v /= 2.0;
        assert_eq!(v, [0.0, 4.0]);
    }

    #[test]
    fn float_division_by_zero() {
        let v = Vector2D::new(1.0f64, -1.0) / 0.0;
        assert_eq!(v, [f64::INFINITY, f64::NEG_INFINITY]);

        let v = Vector2D::new(0.0f32, 0.0) / 0.0;
        assert!(v.x().is_nan() && v.y().is_nan());
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let _ = FixedVector::from([1, 2]) / 0;
    }

    #[test]
    fn unsigned() {
        let v = FixedVector::from([1u32, 2, 3]) + FixedVector::from([3, 2, 1]);
        assert_eq!(v, [4, 4, 4]);
        assert_eq!(v.dot(v), 48);
    }

    #[test]
    fn exact_equality() {
        assert_ne!(Vector2D::new(0.1 + 0.2, 0.0), Vector2D::new(0.3, 0.0));
        assert_eq!([1, 2], FixedVector::from([1, 2]));
        assert_ne!(FixedVector::from([f64::NAN]), FixedVector::from([f64::NAN]));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = FixedVector::from([1, 2, 3]);
        let _ = v[3];
    }
}
