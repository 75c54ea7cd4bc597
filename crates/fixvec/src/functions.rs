//! Free-function forms of the vector operations.
//!
//! Every function here forwards to the corresponding method on [`FixedVector`], [`Vector2D`] or
//! [`Vector3D`]. They are convenient when passing operations around as plain function values, eg.
//! `vectors.iter().map(magn)`.
//!
//! The component getters and setters work on both 2D and 3D vectors through the [`Planar`] and
//! [`Spatial`] traits.

use crate::{
    traits::{Float, Number, ToFloat},
    AngleDir, FixedVector, Vector2D, Vector3D, Zero,
};

/// Vectors with `x` and `y` components.
pub trait Planar {
    type Elem;

    fn x(&self) -> Self::Elem;
    fn y(&self) -> Self::Elem;
    fn set_x(&mut self, x: Self::Elem);
    fn set_y(&mut self, y: Self::Elem);
}

/// Vectors with an additional `z` component.
pub trait Spatial: Planar {
    fn z(&self) -> Self::Elem;
    fn set_z(&mut self, z: Self::Elem);
}

impl<T: Copy> Planar for Vector2D<T> {
    type Elem = T;

    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }

    fn set_x(&mut self, x: T) {
        self[0] = x;
    }

    fn set_y(&mut self, y: T) {
        self[1] = y;
    }
}

impl<T: Copy> Planar for Vector3D<T> {
    type Elem = T;

    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }

    fn set_x(&mut self, x: T) {
        self[0] = x;
    }

    fn set_y(&mut self, y: T) {
        self[1] = y;
    }
}

impl<T: Copy> Spatial for Vector3D<T> {
    fn z(&self) -> T {
        self[2]
    }

    fn set_z(&mut self, z: T) {
        self[2] = z;
    }
}

/// Creates a vector from an array of values, one per dimension.
///
/// ```
/// # use fixvec::functions::*;
/// let v = make_vector([1, 2, 3]);
/// assert_eq!(v.num_dimensions(), 3);
/// ```
#[inline]
pub fn make_vector<T, const N: usize>(values: [T; N]) -> FixedVector<T, N> {
    FixedVector::from(values)
}

/// Creates an `N`-dimensional vector from a sequence of any length.
///
/// Missing trailing values are filled with zero, and surplus values are ignored.
///
/// ```
/// # use fixvec::{functions::*, FixedVector};
/// let padded: FixedVector<f64, 5> = make_vector_from([3.0, 5.0, 2.0]);
/// assert_eq!(padded, [3.0, 5.0, 2.0, 0.0, 0.0]);
///
/// let truncated: FixedVector<f64, 5> = make_vector_from(vec![3.0, 5.0, 2.0, 3.5, 6.0, 39.0, 2.0, 6.0]);
/// assert_eq!(truncated, [3.0, 5.0, 2.0, 3.5, 6.0]);
/// ```
#[inline]
pub fn make_vector_from<T, I, const N: usize>(values: I) -> FixedVector<T, N>
where
    T: Zero,
    I: IntoIterator<Item = T>,
{
    FixedVector::from_values(values)
}

#[inline]
pub fn dot<T: Number, const N: usize>(a: FixedVector<T, N>, b: FixedVector<T, N>) -> T {
    a.dot(b)
}

#[inline]
pub fn cross<T: Number>(a: Vector3D<T>, b: Vector3D<T>) -> Vector3D<T> {
    a.cross(b)
}

/// Returns the magnitude (length) of `v`.
#[inline]
pub fn magn<T: ToFloat, const N: usize>(v: FixedVector<T, N>) -> T::Float {
    v.magnitude()
}

#[inline]
pub fn normalize<T: ToFloat, const N: usize>(v: FixedVector<T, N>) -> FixedVector<T::Float, N> {
    v.normalize()
}

#[inline]
pub fn is_zero<T: ToFloat, const N: usize>(v: &FixedVector<T, N>) -> bool {
    v.is_zero()
}

#[inline]
pub fn x<V: Planar>(v: &V) -> V::Elem {
    v.x()
}

#[inline]
pub fn y<V: Planar>(v: &V) -> V::Elem {
    v.y()
}

#[inline]
pub fn z<V: Spatial>(v: &V) -> V::Elem {
    v.z()
}

#[inline]
pub fn set_x<V: Planar>(v: &mut V, x: V::Elem) {
    v.set_x(x);
}

#[inline]
pub fn set_y<V: Planar>(v: &mut V, y: V::Elem) {
    v.set_y(y);
}

#[inline]
pub fn set_z<V: Spatial>(v: &mut V, z: V::Elem) {
    v.set_z(z);
}

/// Returns the angle between a 2D vector and the positive X axis, in radians.
#[inline]
pub fn angle<T: ToFloat>(v: &Vector2D<T>) -> T::Float {
    v.angle()
}

/// Rotates a 2D vector counterclockwise by `radians`.
#[inline]
pub fn rotate<T: Float>(v: Vector2D<T>, radians: T) -> Vector2D<T> {
    v.rotate(radians)
}

#[inline]
pub fn alpha<T: ToFloat>(v: &Vector3D<T>) -> T::Float {
    v.angle(AngleDir::Alpha)
}

#[inline]
pub fn beta<T: ToFloat>(v: &Vector3D<T>) -> T::Float {
    v.angle(AngleDir::Beta)
}

#[inline]
pub fn gamma<T: ToFloat>(v: &Vector3D<T>) -> T::Float {
    v.angle(AngleDir::Gamma)
}

/// Rotates a 3D vector around the X axis by `radians`.
#[inline]
pub fn rotate_alpha<T: Float>(v: Vector3D<T>, radians: T) -> Vector3D<T> {
    v.rotate(AngleDir::Alpha, radians)
}

/// Rotates a 3D vector around the Y axis by `radians`.
#[inline]
pub fn rotate_beta<T: Float>(v: Vector3D<T>, radians: T) -> Vector3D<T> {
    v.rotate(AngleDir::Beta, radians)
}

/// Rotates a 3D vector around the Z axis by `radians`.
#[inline]
pub fn rotate_gamma<T: Float>(v: Vector3D<T>, radians: T) -> Vector3D<T> {
    v.rotate(AngleDir::Gamma, radians)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_and_spatial_accessors() {
        let mut flat = Vector2D::new(1, 2);
        let mut deep = Vector3D::new(1, 2, 3);

        set_x(&mut flat, 10);
        set_y(&mut deep, 20);
        set_z(&mut deep, 30);
        assert_eq!((x(&flat), y(&flat)), (10, 2));
        assert_eq!((x(&deep), y(&deep), z(&deep)), (1, 20, 30));

        // Trait and inherent accessors agree.
        assert_eq!(Planar::x(&deep), deep.x());
        assert_eq!(Spatial::z(&deep), deep.z());
    }

    #[test]
    fn as_function_values() {
        let vectors = [Vector2D::new(3.0f64, 4.0), Vector2D::new(6.0, 8.0)];
        let lengths: Vec<f64> = vectors.iter().copied().map(magn).collect();
        assert_eq!(lengths, [5.0, 10.0]);
        assert!(vectors.iter().all(|v| !is_zero(v)));
    }
}
