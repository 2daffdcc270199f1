use crate::error::AlgError;
use crate::vec::Vec4;

/// An RGBA color, stored as four normalized floats.
///
/// A specialization of [`Vec4`]: components are conventionally kept in
/// [0, 1] but nothing clamps them, so HDR-ish values survive arithmetic.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Builds a color from either normalized [0, 1] floats or [0, 255]
    /// byte values; if any component exceeds 1 the whole tuple is treated
    /// as bytes and rescaled.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        if r > 1. || g > 1. || b > 1. || a > 1. {
            Color {
                r: r / 255.,
                g: g / 255.,
                b: b / 255.,
                a: a / 255.,
            }
        } else {
            Color { r, g, b, a }
        }
    }

    #[inline]
    pub fn white() -> Color {
        Color::new(1., 1., 1., 1.)
    }

    #[inline]
    pub fn black() -> Color {
        Color::new(0., 0., 0., 1.)
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    /// Six characters imply an opaque alpha.
    pub fn from_hex(input: &str) -> Result<Color, AlgError> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        // Byte slicing below requires single-byte characters
        if !hex.is_ascii() {
            return Err(AlgError::bad_hex(input));
        }

        let channel = |i: usize| -> Result<f32, AlgError> {
            u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
                .map(|byte| byte as f32 / 255.)
                .map_err(|_| AlgError::bad_hex(input))
        };

        match hex.len() {
            6 => Ok(Color {
                r: channel(0)?,
                g: channel(1)?,
                b: channel(2)?,
                a: 1.,
            }),

            8 => Ok(Color {
                r: channel(0)?,
                g: channel(1)?,
                b: channel(2)?,
                a: channel(3)?,
            }),

            _ => Err(AlgError::bad_hex(input)),
        }
    }

    #[inline]
    pub fn from_vec4(v: Vec4) -> Color {
        Color {
            r: v.x,
            g: v.y,
            b: v.z,
            a: v.w,
        }
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Componentwise interpolation towards `other`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color::from_vec4(self.to_vec4().lerp(other.to_vec4(), t))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {}, {}, {} )", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_byte_range() {
        let bytes = Color::new(255., 0., 51., 255.);
        let floats = Color::new(1., 0., 0.2, 1.);

        assert!((bytes.r - floats.r).abs() < 0.0001);
        assert!((bytes.g - floats.g).abs() < 0.0001);
        assert!((bytes.b - floats.b).abs() < 0.0001);
        assert!((bytes.a - floats.a).abs() < 0.0001);
    }

    #[test]
    fn parse_hex() {
        let color = Color::from_hex("#ff0033").unwrap();

        assert!((color.r - 1.).abs() < 0.0001);
        assert!(color.g == 0.);
        assert!((color.b - 0.2).abs() < 0.0001);
        assert!(color.a == 1.);

        let color = Color::from_hex("ff003380").unwrap();
        assert!((color.a - 128. / 255.).abs() < 0.0001);
    }

    #[test]
    fn reject_bad_hex() {
        assert!(Color::from_hex("ff00").is_err());
        assert!(Color::from_hex("#gg0033").is_err());
        assert!(Color::from_hex("ff00334").is_err());
    }

    #[test]
    fn lerp_colors() {
        let mid = Color::black().lerp(Color::white(), 0.5);

        assert!(mid.r == 0.5 && mid.g == 0.5 && mid.b == 0.5);
        assert!(mid.a == 1.);
    }
}
