//! Fixed-size linear algebra for real-time graphics.
//!
//! 2/3/4-component float vectors, 2x2 through 4x4 row-major matrices,
//! and the matrix constructors a rendering pipeline needs each frame:
//! projections, view matrices, affine transforms, normal matrices, and
//! Bezier interpolation for camera paths.
//!
//! Everything is a small `Copy` value type and every operation is a pure
//! function; results are new values and operands are never mutated.
//! Recoverable misuse (singular inverse, bad clipping planes) surfaces
//! as [`AlgError`]; plain numeric edge cases (division by zero, NaN
//! input) propagate through results as IEEE-754 `NaN`/`inf` instead,
//! matching how the consuming renderer expects to observe them.

pub mod color;
pub mod curve;
pub mod error;
pub mod mat;
pub mod transform;
pub mod vec;

pub use color::Color;
pub use error::AlgError;
pub use mat::{Mat2, Mat3, Mat4};
pub use vec::{Vec2, Vec3, Vec4};
