use std::ops::{Add, Div, Mul, Neg, Sub};

/* Fixed-size float vectors.
 *
 * Every operation returns a new value; operands are never mutated.
 * Division is plain IEEE-754 division: a zero divisor produces
 * inf/NaN components rather than an error.
 */

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::new(0., 0.)
    }

    #[inline]
    pub fn one() -> Vec2 {
        Vec2::new(1., 1.)
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn norm(self) -> Vec2 {
        self * (1. / self.mag())
    }

    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        self + (other - self) * t
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    #[inline]
    pub fn fwd() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }

    /// Extends a Vec2 with an explicit z.
    #[inline]
    pub fn from_vec2(v: Vec2, z: f32) -> Vec3 {
        Vec3::new(v.x, v.y, z)
    }

    /// Truncates to the first two components.
    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    // Normalizing the zero vector divides by zero and yields NaN components
    pub fn norm(self) -> Vec3 {
        self * (1. / self.mag())
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self) * t
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Vec4 {
        Vec4::new(0., 0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec4 {
        Vec4::new(1., 1., 1., 1.)
    }

    /// Extends a Vec3 with an explicit homogeneous component.
    #[inline]
    pub fn from_vec3(v: Vec3, w: f32) -> Vec4 {
        Vec4::new(v.x, v.y, v.z, w)
    }

    /// Truncates to the first three components.
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn norm(self) -> Vec4 {
        self * (1. / self.mag())
    }

    pub fn lerp(self, other: Vec4, t: f32) -> Vec4 {
        self + (other - self) * t
    }
}

macro_rules! componentwise_ops {
    ($vec:ident { $($field:ident),+ }) => {
        impl Add for $vec {
            type Output = $vec;

            fn add(self, other: $vec) -> $vec {
                $vec::new($(self.$field + other.$field),+)
            }
        }

        impl Sub for $vec {
            type Output = $vec;

            fn sub(self, other: $vec) -> $vec {
                $vec::new($(self.$field - other.$field),+)
            }
        }

        impl Neg for $vec {
            type Output = $vec;

            fn neg(self) -> $vec {
                $vec::new($(-self.$field),+)
            }
        }

        impl Mul<f32> for $vec {
            type Output = $vec;

            fn mul(self, scalar: f32) -> $vec {
                $vec::new($(self.$field * scalar),+)
            }
        }

        impl Div<f32> for $vec {
            type Output = $vec;

            fn div(self, scalar: f32) -> $vec {
                $vec::new($(self.$field / scalar),+)
            }
        }
    };
}

componentwise_ops!(Vec2 { x, y });
componentwise_ops!(Vec3 { x, y, z });
componentwise_ops!(Vec4 { x, y, z, w });

impl std::fmt::Display for Vec2 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {} )", self.x, self.y)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Vec4 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {}, {}, {} )", self.x, self.y, self.z, self.w)
    }
}
