//! Generic fixed-dimension vectors.
//!
//! This library provides [`FixedVector`], an `N`-dimensional vector whose dimension is a const
//! generic parameter, along with the 2- and 3-dimensional specializations [`Vector2D`] and
//! [`Vector3D`].
//!
//! # Goals & Non-Goals
//!
//! - Only support statically-sized vectors. Relying on const generics for the dimension means
//!   that adding a 2D vector to a 3D vector simply doesn't compile.
//! - Be generic over the element type, and support every built-in integer and floating-point type.
//!   Operations that only make sense for floating-point numbers (like [`FixedVector::magnitude`])
//!   promote integer elements via [`ToFloat`].
//! - No matrices, quaternions, or dynamically-sized vectors.
//! - Vectors are [`Copy`] value types with the exact layout of `[T; N]`, so they can be cast to and
//!   from raw bytes with [`bytemuck`].
//!
//! # Operations
//!
//! Methods on [`FixedVector`] and its specializations are the primary API. The [`functions`]
//! module offers the same operations as free functions.
//!
//! ```
//! # use fixvec::*;
//! let a = Vector2D::new(2i32, 5);
//! let b = Vector2D::new(-3, -4);
//! assert_eq!(a.dot(b), -26);
//! assert_eq!(a + b, Vector2D::new(-1, 1));
//! assert_eq!((a * 2).to_string(), "<4, 10>");
//! ```
//!
//! # Cargo Features
//!
//! - `experimental-compare`: lexicographic ordering of vectors via `lex_cmp` and the
//!   [`PartialOrd`] and [`Ord`] impls. Vectors of lower dimension order before vectors of higher
//!   dimension.

pub mod functions;

mod error;
mod traits;
mod vector;
mod vector2d;
mod vector3d;

pub use error::*;
pub use traits::*;
pub use vector::*;
pub use vector2d::*;
pub use vector3d::*;
