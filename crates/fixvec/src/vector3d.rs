//! 3-dimensional vectors.

use crate::{
    traits::{Float, Number, ToFloat, Trig},
    FixedVector, One, Zero,
};

/// A 3-dimensional vector with elements `x`, `y` and `z`.
///
/// This is a [`FixedVector`] with 3 dimensions, so all generic vector operations are available.
/// The named accessors alias the indexed storage: `v.x()`, `v.y()` and `v.z()` are always `v[0]`,
/// `v[1]` and `v[2]`.
///
/// # Examples
///
/// ```
/// # use fixvec::*;
/// let a = Vector3D::new(2, 3, 5);
/// let b = Vector3D::new(1, 2, 3);
/// assert_eq!(a.cross(b), Vector3D::new(-1, -1, 1));
/// assert_eq!(a.dot(b), 23);
/// ```
pub type Vector3D<T> = FixedVector<T, 3>;

/// Selects one of the three coordinate axes of a [`Vector3D`].
///
/// Used both for the direction angle a vector forms with an axis ([`FixedVector::angle`]) and for
/// rotations around an axis ([`FixedVector::rotate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleDir {
    /// The X axis (angle α).
    Alpha,
    /// The Y axis (angle β).
    Beta,
    /// The Z axis (angle γ).
    Gamma,
}

impl AngleDir {
    /// All axes, in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::Gamma];

    /// Returns the index of the vector component along this axis.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Alpha => 0,
            Self::Beta => 1,
            Self::Gamma => 2,
        }
    }
}

impl<T: Zero + One> FixedVector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T> FixedVector<T, 3> {
    /// Creates a 3-dimensional vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
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
    pub fn z(&self) -> T
    where
        T: Copy,
    {
        self.0[2]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.0[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.0[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.0[2] = z;
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let x = Vector3D::<f32>::X;
    /// let y = Vector3D::<f32>::Y;
    /// let z = Vector3D::<f32>::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = Self::new(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Returns the direction angle between this vector and the axis selected by `dir`, in
    /// radians.
    ///
    /// The angle is `acos(component / magnitude)` and lies in `[0, π]`. For the zero vector the
    /// result is `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector3D::new(0.0f64, 0.0, 2.0);
    /// assert_eq!(v.angle(AngleDir::Gamma), 0.0);
    /// assert_eq!(v.angle(AngleDir::Alpha), FRAC_PI_2);
    /// ```
    pub fn angle(&self, dir: AngleDir) -> T::Float
    where
        T: ToFloat,
    {
        (self.0[dir.index()].to_float() / self.magnitude()).acos()
    }

    /// Returns the angle α between this vector and the X axis.
    #[inline]
    pub fn alpha(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.angle(AngleDir::Alpha)
    }

    /// Returns the angle β between this vector and the Y axis.
    #[inline]
    pub fn beta(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.angle(AngleDir::Beta)
    }

    /// Returns the angle γ between this vector and the Z axis.
    #[inline]
    pub fn gamma(&self) -> T::Float
    where
        T: ToFloat,
    {
        self.angle(AngleDir::Gamma)
    }

    /// Rotates `self` around the axis selected by `dir` by `radians`, returning the rotated
    /// vector.
    ///
    /// Positive angles rotate counterclockwise when looking from the positive end of the axis
    /// towards the origin (right-hand rule). The component along the rotation axis is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector3D::new(1.0, 0.0, 7.0).rotate(AngleDir::Gamma, FRAC_PI_2);
    /// assert!((v.x() - 0.0).abs() < 1e-9);
    /// assert!((v.y() - 1.0).abs() < 1e-9);
    /// assert_eq!(v.z(), 7.0);
    /// ```
    pub fn rotate(self, dir: AngleDir, radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        let [x, y, z] = self.0;

        match dir {
            // | 1    0     0  |
            // | 0   cos  -sin |
            // | 0   sin   cos |
            AngleDir::Alpha => Self::new(x, y * cos - z * sin, y * sin + z * cos),
            // |  cos  0   sin |
            // |   0   1    0  |
            // | -sin  0   cos |
            AngleDir::Beta => Self::new(x * cos + z * sin, y, -x * sin + z * cos),
            // | cos  -sin  0 |
            // | sin   cos  0 |
            // |  0     0   1 |
            AngleDir::Gamma => Self::new(x * cos - y * sin, x * sin + y * cos, z),
        }
    }

    /// Converts the components into any type that can be created from an `(x, y, z)` tuple.
    pub fn components_as<U>(self) -> U
    where
        U: From<(T, T, T)>,
    {
        let [x, y, z] = self.0;
        U::from((x, y, z))
    }

    /// Converts the direction angles into any type that can be created from an `(α, β, γ)`
    /// tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixvec::*;
    /// let (alpha, beta, gamma): (f64, f64, f64) = Vector3D::new(1i32, 0, 0).angles_as();
    /// assert_eq!(alpha, 0.0);
    /// assert_eq!(beta, std::f64::consts::FRAC_PI_2);
    /// assert_eq!(gamma, std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn angles_as<U>(&self) -> U
    where
        T: ToFloat,
        U: From<(T::Float, T::Float, T::Float)>,
    {
        U::from((self.alpha(), self.beta(), self.gamma()))
    }
}

impl<T> From<(T, T, T)> for FixedVector<T, 3> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<FixedVector<T, 3>> for (T, T, T) {
    #[inline]
    fn from(value: FixedVector<T, 3>) -> Self {
        let [x, y, z] = value.0;
        (x, y, z)
    }
}
