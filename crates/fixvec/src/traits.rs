//! Numeric element traits.
//!
//! [`FixedVector`][crate::FixedVector] only stores arithmetic element types. These traits describe
//! what "arithmetic" means here, and how integral element types get promoted to floating point for
//! operations like [`FixedVector::magnitude`][crate::FixedVector::magnitude] that need a square
//! root.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is implemented for every built-in integer and floating-point type. Negation is not part of
/// this trait so that unsigned integers qualify; operations that flip signs additionally require
/// [`Neg`][ops::Neg].
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Computes the four-quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Floating-point element types ([`f32`] and [`f64`]).
pub trait Float: Number + ops::Neg<Output = Self> + Sqrt + Trig + PartialOrd {}

impl Float for f32 {}
impl Float for f64 {}

/// Promotion of an element type to a floating-point type.
///
/// Floating-point types promote to themselves. All integer types promote to [`f64`], which is
/// lossy for 64- and 128-bit integers outside of `±2^53`.
pub trait ToFloat: Copy {
    /// The floating-point type this type is promoted to.
    type Float: Float;

    fn to_float(self) -> Self::Float;
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl ToFloat for $types {
                type Float = f64;

                #[inline]
                fn to_float(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl ToFloat for $types {
                type Float = Self;

                #[inline]
                fn to_float(self) -> Self {
                    self
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    $types::sin(self)
                }

                fn cos(self) -> Self {
                    $types::cos(self)
                }

                fn tan(self) -> Self {
                    $types::tan(self)
                }

                fn asin(self) -> Self {
                    $types::asin(self)
                }

                fn acos(self) -> Self {
                    $types::acos(self)
                }

                fn atan(self) -> Self {
                    $types::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $types::atan2(self, other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
