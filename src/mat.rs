use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::AlgError;
use crate::vec::{Vec2, Vec3, Vec4};

/* Fixed-size square matrices, stored row-major.
 *
 * Inverses are computed by the adjugate method: determinants expand
 * recursively along row 0, a 4x4 reducing to four 3x3 minors and a 3x3
 * to three 2x2 closed-form base cases. The expansion order is part of
 * the contract; reordering it changes rounding on tie-break-sensitive
 * inputs.
 *
 * The singularity check is bit-exact (det == 0.0). Near-singular input
 * inverts with whatever precision the floats allow, and NaN input flows
 * through every operation untouched.
 */

macro_rules! mat_common {
    ($mat:ident, $dim:expr) => {
        impl $mat {
            pub const SIZE: usize = $dim * $dim;

            /// `get(row, col)` reads `array[row * N + col]`.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> f32 {
                debug_assert!(row < $dim && col < $dim);
                self.m[row * $dim + col]
            }

            // Low-level setter for row/column assembly
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: f32) {
                debug_assert!(row < $dim && col < $dim);
                self.m[row * $dim + col] = value;
            }

            /// Read-only row-major view of the backing array, for bulk
            /// transfer to a buffer-consuming API.
            #[inline]
            pub fn as_slice(&self) -> &[f32] {
                &self.m
            }

            pub fn transpose(self) -> $mat {
                let mut out = self;

                for row in 0..$dim {
                    for col in 0..$dim {
                        out.m[col * $dim + row] = self.m[row * $dim + col];
                    }
                }

                out
            }
        }

        impl Default for $mat {
            fn default() -> $mat {
                $mat::identity()
            }
        }

        impl Add for $mat {
            type Output = $mat;

            fn add(self, other: $mat) -> $mat {
                let mut out = self;

                for i in 0..$mat::SIZE {
                    out.m[i] += other.m[i];
                }

                out
            }
        }

        impl Sub for $mat {
            type Output = $mat;

            fn sub(self, other: $mat) -> $mat {
                let mut out = self;

                for i in 0..$mat::SIZE {
                    out.m[i] -= other.m[i];
                }

                out
            }
        }

        impl Neg for $mat {
            type Output = $mat;

            fn neg(self) -> $mat {
                let mut out = self;

                for i in 0..$mat::SIZE {
                    out.m[i] = -out.m[i];
                }

                out
            }
        }

        impl Mul<f32> for $mat {
            type Output = $mat;

            fn mul(self, scalar: f32) -> $mat {
                let mut out = self;

                for i in 0..$mat::SIZE {
                    out.m[i] *= scalar;
                }

                out
            }
        }

        impl Div<f32> for $mat {
            type Output = $mat;

            // IEEE division; a zero scalar produces inf/NaN entries
            fn div(self, scalar: f32) -> $mat {
                let mut out = self;

                for i in 0..$mat::SIZE {
                    out.m[i] /= scalar;
                }

                out
            }
        }

        impl Mul for $mat {
            type Output = $mat;

            // Row-by-column dot products
            fn mul(self, other: $mat) -> $mat {
                let mut out = [0f32; $mat::SIZE];

                for row in 0..$dim {
                    for col in 0..$dim {
                        let mut sum = 0.;

                        for k in 0..$dim {
                            sum += self.m[row * $dim + k] * other.m[k * $dim + col];
                        }

                        out[row * $dim + col] = sum;
                    }
                }

                $mat { m: out }
            }
        }
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat2 {
    m: [f32; 4],
}

mat_common!(Mat2, 2);

impl Mat2 {
    pub fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Mat2 {
        Mat2 {
            m: [
                m00, m01,
                m10, m11,
            ],
        }
    }

    #[inline]
    pub fn identity() -> Mat2 {
        Mat2::new(
            1.0, 0.0,
            0.0, 1.0,
        )
    }

    pub fn from_rows(r0: Vec2, r1: Vec2) -> Mat2 {
        Mat2::new(
            r0.x, r0.y,
            r1.x, r1.y,
        )
    }

    pub fn row(&self, i: usize) -> Vec2 {
        Vec2::new(self.get(i, 0), self.get(i, 1))
    }

    pub fn col(&self, i: usize) -> Vec2 {
        Vec2::new(self.get(0, i), self.get(1, i))
    }

    /// Closed-form base case of the recursive expansion.
    pub fn determinant(&self) -> f32 {
        self.m[0] * self.m[3] - self.m[2] * self.m[1]
    }

    pub fn minors(&self) -> Mat2 {
        // A 1x1 minor is just the opposite entry
        Mat2::new(
            self.m[3], self.m[2],
            self.m[1], self.m[0],
        )
    }

    pub fn cofactors(&self) -> Mat2 {
        let minors = self.minors();

        Mat2::new(
             minors.m[0], -minors.m[1],
            -minors.m[2],  minors.m[3],
        )
    }

    /// Closed-form swap-and-negate.
    pub fn adjoint(&self) -> Mat2 {
        Mat2::new(
             self.m[3], -self.m[1],
            -self.m[2],  self.m[0],
        )
    }

    pub fn inverse(&self) -> Result<Mat2, AlgError> {
        let det = self.determinant();

        if det == 0.0 {
            return Err(AlgError::SingularMatrix);
        }

        Ok(self.adjoint() * (1. / det))
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        Vec2::new(self.row(0).dot(vec), self.row(1).dot(vec))
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat3 {
    m: [f32; 9],
}

mat_common!(Mat3, 3);

impl Mat3 {
    pub fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Mat3 {
        Mat3 {
            m: [
                m00, m01, m02,
                m10, m11, m12,
                m20, m21, m22,
            ],
        }
    }

    #[inline]
    pub fn identity() -> Mat3 {
        Mat3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    pub fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Mat3 {
        Mat3::new(
            r0.x, r0.y, r0.z,
            r1.x, r1.y, r1.z,
            r2.x, r2.y, r2.z,
        )
    }

    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(i, 0), self.get(i, 1), self.get(i, 2))
    }

    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.get(0, i), self.get(1, i), self.get(2, i))
    }

    /// Deletes one row and one column, preserving the relative order of
    /// the remaining entries.
    pub fn exclude(&self, col: usize, row: usize) -> Mat2 {
        debug_assert!(col < 3 && row < 3);

        let mut out = [0f32; 4];
        let mut k = 0;

        for r in 0..3 {
            if r == row {
                continue;
            }

            for c in 0..3 {
                if c == col {
                    continue;
                }

                out[k] = self.get(r, c);
                k += 1;
            }
        }

        Mat2 { m: out }
    }

    /// Cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        let mut det = 0.;
        let mut sign = 1.;

        for col in 0..3 {
            det += sign * self.get(0, col) * self.exclude(col, 0).determinant();
            sign = -sign;
        }

        det
    }

    pub fn minors(&self) -> Mat3 {
        let mut out = *self;

        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, self.exclude(col, row).determinant());
            }
        }

        out
    }

    pub fn cofactors(&self) -> Mat3 {
        let mut out = self.minors();

        for row in 0..3 {
            for col in 0..3 {
                if (row + col) % 2 == 1 {
                    out.set(row, col, -out.get(row, col));
                }
            }
        }

        out
    }

    pub fn adjoint(&self) -> Mat3 {
        self.cofactors().transpose()
    }

    /// Fails iff the determinant is exactly zero. A NaN determinant is
    /// not zero, so NaN input "inverts" into a NaN matrix.
    pub fn inverse(&self) -> Result<Mat3, AlgError> {
        let det = self.determinant();

        if det == 0.0 {
            return Err(AlgError::SingularMatrix);
        }

        Ok(self.adjoint() * (1. / det))
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        Vec3::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat4 {
    m: [f32; 16],
}

mat_common!(Mat4, 4);

impl Mat4 {
    pub fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Mat4 {
        Mat4 {
            m: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }

    #[inline]
    pub fn identity() -> Mat4 {
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Mat4 {
        Mat4::new(
            r0.x, r0.y, r0.z, r0.w,
            r1.x, r1.y, r1.z, r1.w,
            r2.x, r2.y, r2.z, r2.w,
            r3.x, r3.y, r3.z, r3.w,
        )
    }

    /// Row-packs three basis vectors with a zero homogeneous component
    /// and closes with the (0, 0, 0, 1) row.
    pub fn from_vec3_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Mat4 {
        Mat4::from_rows(
            Vec4::from_vec3(r0, 0.),
            Vec4::from_vec3(r1, 0.),
            Vec4::from_vec3(r2, 0.),
            Vec4::new(0., 0., 0., 1.),
        )
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(
            self.get(i, 0),
            self.get(i, 1),
            self.get(i, 2),
            self.get(i, 3),
        )
    }

    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(
            self.get(0, i),
            self.get(1, i),
            self.get(2, i),
            self.get(3, i),
        )
    }

    /// Deletes one row and one column, preserving the relative order of
    /// the remaining entries.
    pub fn exclude(&self, col: usize, row: usize) -> Mat3 {
        debug_assert!(col < 4 && row < 4);

        let mut out = [0f32; 9];
        let mut k = 0;

        for r in 0..4 {
            if r == row {
                continue;
            }

            for c in 0..4 {
                if c == col {
                    continue;
                }

                out[k] = self.get(r, c);
                k += 1;
            }
        }

        Mat3 { m: out }
    }

    /// Upper-left 3x3 submatrix.
    pub fn upper3(&self) -> Mat3 {
        self.exclude(3, 3)
    }

    /// Cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        let mut det = 0.;
        let mut sign = 1.;

        for col in 0..4 {
            det += sign * self.get(0, col) * self.exclude(col, 0).determinant();
            sign = -sign;
        }

        det
    }

    pub fn minors(&self) -> Mat4 {
        let mut out = *self;

        for row in 0..4 {
            for col in 0..4 {
                out.set(row, col, self.exclude(col, row).determinant());
            }
        }

        out
    }

    pub fn cofactors(&self) -> Mat4 {
        let mut out = self.minors();

        for row in 0..4 {
            for col in 0..4 {
                if (row + col) % 2 == 1 {
                    out.set(row, col, -out.get(row, col));
                }
            }
        }

        out
    }

    pub fn adjoint(&self) -> Mat4 {
        self.cofactors().transpose()
    }

    /// Fails iff the determinant is exactly zero. A NaN determinant is
    /// not zero, so NaN input "inverts" into a NaN matrix.
    pub fn inverse(&self) -> Result<Mat4, AlgError> {
        let det = self.determinant();

        if det == 0.0 {
            return Err(AlgError::SingularMatrix);
        }

        Ok(self.adjoint() * (1. / det))
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
            self.row(3).dot(vec),
        )
    }
}

impl std::fmt::Display for Mat2 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {} ]\n[ {}, {} ]",
            self.m[0], self.m[1],
            self.m[2], self.m[3],
        )
    }
}

impl std::fmt::Display for Mat3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {}, {} ]\n[ {}, {}, {} ]\n[ {}, {}, {} ]",
            self.m[0], self.m[1], self.m[2],
            self.m[3], self.m[4], self.m[5],
            self.m[6], self.m[7], self.m[8],
        )
    }
}

impl std::fmt::Display for Mat4 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]\n\
            [ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]",
            self.m[0], self.m[1], self.m[2], self.m[3],
            self.m[4], self.m[5], self.m[6], self.m[7],
            self.m[8], self.m[9], self.m[10], self.m[11],
            self.m[12], self.m[13], self.m[14], self.m[15],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq_mat4(a: Mat4, b: Mat4, eps: f32) -> bool {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(x, y)| (x - y).abs() < eps)
    }

    fn random_affine() -> Mat4 {
        // Composition of well-conditioned transforms
        let spread = |x: f32| 4. * x - 2.;

        let rotation = crate::transform::rotation_y(360. * rand::random::<f32>())
            * crate::transform::rotation_x(360. * rand::random::<f32>());

        let translation = crate::transform::translation(
            spread(rand::random()),
            spread(rand::random()),
            spread(rand::random()),
        );

        let scale = crate::transform::scale(
            1. + rand::random::<f32>(),
            1. + rand::random::<f32>(),
            1. + rand::random::<f32>(),
        );

        translation * rotation * scale
    }

    #[test]
    fn mul_identity() {
        let mat = Mat4::new(
            0.5, 1.0, 2.0, -1.0,
            3.0, 0.0, 1.0, 7.0,
            2.0, 6.0, 4.0, 8.0,
            3.0, 1.0, 1.0, 2.0,
        );

        assert!(mat * Mat4::identity() == mat);
        assert!(Mat4::identity() * mat == mat);

        let mat = Mat2::new(0.5, 1.0, 0.0, 3.0);
        assert!(mat * Mat2::identity() == mat);
        assert!(Mat2::identity() * mat == mat);

        let mat = Mat3::new(
            1., 2., 3.,
            4., 5., 6.,
            7., 8., 0.,
        );

        assert!(mat * Mat3::identity() == mat);
        assert!(Mat3::identity() * mat == mat);
    }

    #[test]
    fn mul_vec() {
        let vec = Vec3::new(9., -4., 0.);
        let scale = Mat3::new(
            -1., 0., 0.,
             0., 3., 0.,
             0., 0., 2.,
        );

        assert!(Mat3::identity() * vec == vec);
        assert!(scale * vec == Vec3::new(-9., -12., 0.));

        let point = Vec4::new(1., 2., 3., 1.);
        let offset = crate::transform::translation(10., 20., 30.);

        assert!(offset * point == Vec4::new(11., 22., 33., 1.));
    }

    #[test]
    fn transpose_involution() {
        let mat = Mat4::new(
             1.,  2.,  3.,  4.,
             5.,  6.,  7.,  8.,
             9., 10., 11., 12.,
            13., 14., 15., 16.,
        );

        assert!(mat.transpose().transpose() == mat);
        assert!(mat.transpose().get(0, 3) == 13.);
    }

    #[test]
    fn row_major_layout() {
        let mut mat = Mat3::identity();
        mat.set(1, 2, 5.);

        assert!(mat.get(1, 2) == 5.);
        assert!(mat.as_slice()[1 * 3 + 2] == 5.);
        assert!(Mat3::SIZE == 9);
    }

    #[test]
    fn exclude_preserves_order() {
        let mat = Mat4::new(
             1.,  2.,  3.,  4.,
             5.,  6.,  7.,  8.,
             9., 10., 11., 12.,
            13., 14., 15., 16.,
        );

        assert!(
            mat.exclude(1, 2) == Mat3::new(
                 1.,  3.,  4.,
                 5.,  7.,  8.,
                13., 15., 16.,
            )
        );

        assert!(mat.upper3() == Mat3::new(
             1.,  2.,  3.,
             5.,  6.,  7.,
             9., 10., 11.,
        ));
    }

    #[test]
    fn determinant_2x2() {
        let mat = Mat2::new(0.5, 1.0, 0.0, 3.0);
        assert!(mat.determinant() == 1.5);
    }

    #[test]
    fn inverse_2x2() {
        let mat = Mat2::new(0.5, 1.0, 0.0, 3.0);
        let inverse = mat.inverse().unwrap();
        let expected = Mat2::new(2.0, -0.667, 0.0, 0.333);

        for i in 0..Mat2::SIZE {
            let error = (inverse.as_slice()[i] - expected.as_slice()[i]).abs();
            assert!(error < 0.001);
        }
    }

    #[test]
    fn determinant_4x4_block() {
        // Block triangular; the determinant is the product of the blocks
        let mat = Mat4::new(
            2., 1., 0., 0.,
            1., 1., 0., 0.,
            3., 4., 1., 2.,
            5., 6., 3., 4.,
        );

        assert!((mat.determinant() - -2.).abs() < 1e-6);
    }

    #[test]
    fn determinant_4x4_fixture() {
        let mat = Mat4::new(
            0.33, 0.66, 0.33, 0.66,
            0.66, 0.33, 0.66, 0.33,
            0.33, 0.33, 0.66, 0.66,
            0.66, 0.66, 0.33, 0.66,
        );

        let det = mat.determinant();
        eprintln!("det = {}", det);

        assert!((det - -0.0355776).abs() < 1e-6);
    }

    #[test]
    fn determinant_multiplicative() {
        for _ in 0..16 {
            let a = random_affine();
            let b = random_affine();

            let lhs = (a * b).determinant();
            let rhs = a.determinant() * b.determinant();

            let error = (lhs - rhs).abs() / rhs.abs().max(1.);
            eprintln!("Error: {}", error);
            assert!(error < 1e-4);
        }
    }

    #[test]
    fn inverse_law() {
        for _ in 0..16 {
            let mat = random_affine();
            let inverse = mat.inverse().unwrap();

            assert!(approx_eq_mat4(mat * inverse, Mat4::identity(), 1e-4));
            assert!(approx_eq_mat4(inverse * mat, Mat4::identity(), 1e-4));
        }
    }

    #[test]
    fn singular_inverse_fails() {
        let mat = Mat3::new(
            1., 2., 3.,
            2., 4., 6.,
            0., 1., 1.,
        );

        assert!(mat.inverse() == Err(AlgError::SingularMatrix));

        let mat = Mat4::new(
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 0., 0.,
            0., 0., 0., 1.,
        );

        assert!(mat.inverse() == Err(AlgError::SingularMatrix));
    }

    #[test]
    fn nan_input_propagates_through_inverse() {
        let mut mat = Mat3::identity();
        mat.set(0, 0, f32::NAN);

        // NaN determinant is not equal to zero, so the inverse path runs
        let inverse = mat.inverse().unwrap();
        assert!(inverse.get(0, 0).is_nan());
    }

    #[test]
    fn adjoint_parts() {
        let mat = Mat3::new(
            1., 2., 3.,
            0., 1., 4.,
            5., 6., 0.,
        );

        // Hand-expanded minors for spot checks
        assert!(mat.minors().get(0, 0) == -24.);
        assert!(mat.minors().get(1, 0) == -18.);
        assert!(mat.cofactors().get(1, 0) == 18.);
        assert!(mat.adjoint().get(0, 1) == 18.);

        // det = 1; the adjugate is the exact inverse
        assert!(mat.determinant() == 1.);
        assert!(mat.inverse().unwrap() == mat.adjoint());
    }

    #[test]
    fn scalar_div_propagates() {
        let mat = Mat2::identity() / 0.;

        assert!(mat.get(0, 0).is_infinite());
        assert!(mat.get(0, 1).is_nan());
    }
}
