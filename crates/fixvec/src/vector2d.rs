//! 2-dimensional vectors.

use crate::{
    traits::{Float, ToFloat, Trig},
    FixedVector, One, Zero,
};

/// A 2-dimensional vector with elements `x` and `y`.
///
/// This is a [`FixedVector`] with 2 dimensions, so all generic vector operations are available.
/// The named accessors alias the indexed storage: `v.x()` is always `v[0]`, `v.y()` is `v[1]`.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// let mut v = Vector2D::new(3.0, 5.0);
/// v.set_y(-1.0);
/// assert_eq!(v[1], -1.0);
/// assert_eq!(v.to_string(), "<3, -1>");
/// ```
pub type Vector2D<T> = FixedVector<T, 2>;

impl<T: Zero + One> FixedVector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T> FixedVector<T, 2> {
    /// Creates a 2-dimensional vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    #[inline]
    pub fn x(&self) -> T
    where
        T: Copy,
    {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T
    where
        T: Copy,
    {
        self.0[1]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.0[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.0[1] = y;
    }

    /// Returns the angle between this vector and the positive X axis, in radians.
    ///
    /// The result is in the range `(-π, π]`, positive for vectors above the X axis (counterclockwise
    /// from it).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Vector2D::new(1.0f64, 0.0).angle(), 0.0);
    /// assert_eq!(Vector2D::new(0i32, 2).angle(), PI / 2.0);
    /// assert_eq!(Vector2D::new(-1.0f64, 0.0).angle(), PI);
    /// ```
    pub fn angle(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.y().to_float().atan2(self.x().to_float())
    }

    /// Rotates `self` counterclockwise by `radians`, returning the rotated vector.
    ///
    /// Negative angles rotate clockwise. This assumes that the Y axis points up, and the X axis
    /// points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// use std::f64::consts::FRAC_PI_6;
    ///
    /// let v = Vector2D::new(1.0, 0.0).rotate(FRAC_PI_6);
    /// assert!((v.x() - 0.866).abs() < 1e-3);
    /// assert!((v.y() - 0.5).abs() < 1e-3);
    /// ```
    pub fn rotate(self, radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        let [x, y] = self.0;

        // | cos  -sin | |x|
        // | sin   cos | |y|
        Self::new(x * cos - y * sin, x * sin + y * cos)
    }

    /// Converts the components into any type that can be created from an `(x, y)` tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// struct Point {
    ///     x: f32,
    ///     y: f32,
    /// }
    ///
    /// impl From<(f32, f32)> for Point {
    ///     fn from((x, y): (f32, f32)) -> Self {
    ///         Self { x, y }
    ///     }
    /// }
    ///
    /// let p: Point = Vector2D::new(1.0f32, 2.0).components_as();
    /// assert_eq!((p.x, p.y), (1.0, 2.0));
    /// ```
    pub fn components_as<U>(self) -> U
    where
        U: From<(T, T)>,
    {
        let [x, y] = self.0;
        U::from((x, y))
    }
}

impl<T> From<(T, T)> for FixedVector<T, 2> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<FixedVector<T, 2>> for (T, T) {
    #[inline]
    fn from(value: FixedVector<T, 2>) -> Self {
        let [x, y] = value.0;
        (x, y)
    }
}
