use crate::error::AlgError;
use crate::mat::{Mat3, Mat4};
use crate::vec::Vec3;

/* Graphics matrix constructors.
 *
 * All functions are pure and return a fresh Mat4 (column-vector
 * convention, translation in the last column). Angles are taken in
 * degrees. Projection constructors validate their clipping ranges and
 * fail with InvalidRange; everything else propagates whatever IEEE-754
 * arithmetic produces, including NaN from degenerate axes.
 */

pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::new(
        1.0, 0.0, 0.0,   x,
        0.0, 1.0, 0.0,   y,
        0.0, 0.0, 1.0,   z,
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn translation_vec(offset: Vec3) -> Mat4 {
    translation(offset.x, offset.y, offset.z)
}

pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::new(
          x, 0.0, 0.0, 0.0,
        0.0,   y, 0.0, 0.0,
        0.0, 0.0,   z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn scale_vec(factors: Vec3) -> Mat4 {
    scale(factors.x, factors.y, factors.z)
}

pub fn scale_uniform(factor: f32) -> Mat4 {
    scale(factor, factor, factor)
}

pub fn rotation_x(deg: f32) -> Mat4 {
    let rad = deg.to_radians();
    let (s, c) = (rad.sin(), rad.cos());

    Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,   c,  -s, 0.0,
        0.0,   s,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn rotation_y(deg: f32) -> Mat4 {
    let rad = deg.to_radians();
    let (s, c) = (rad.sin(), rad.cos());

    Mat4::new(
          c, 0.0,   s, 0.0,
        0.0, 1.0, 0.0, 0.0,
         -s, 0.0,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn rotation_z(deg: f32) -> Mat4 {
    let rad = deg.to_radians();
    let (s, c) = (rad.sin(), rad.cos());

    Mat4::new(
          c,  -s, 0.0, 0.0,
          s,   c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rodrigues' rotation around an arbitrary axis.
///
/// The axis is normalized internally; a zero-length axis divides by zero
/// and yields a NaN matrix rather than an error. Callers own axis
/// validity.
pub fn rotation_axis(deg: f32, axis: Vec3) -> Mat4 {
    let rad = deg.to_radians();
    let (s, c) = (rad.sin(), rad.cos());
    let t = 1. - c;

    let u = axis.norm();

    Mat4::new(
        t * u.x * u.x + c,       t * u.x * u.y - s * u.z, t * u.x * u.z + s * u.y, 0.0,
        t * u.x * u.y + s * u.z, t * u.y * u.y + c,       t * u.y * u.z - s * u.x, 0.0,
        t * u.x * u.z - s * u.y, t * u.y * u.z + s * u.x, t * u.z * u.z + c,       0.0,
        0.0,                     0.0,                     0.0,                     1.0,
    )
}

fn check_planes(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<(), AlgError> {
    // Negated comparisons so NaN parameters fail too
    if !(right > left) {
        return Err(AlgError::InvalidRange("right must exceed left"));
    }

    if !(top > bottom) {
        return Err(AlgError::InvalidRange("top must exceed bottom"));
    }

    if !(far > near) {
        return Err(AlgError::InvalidRange("far must exceed near"));
    }

    Ok(())
}

/// OpenGL-style orthographic projection.
pub fn ortho(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, AlgError> {
    check_planes(left, right, bottom, top, near, far)?;

    Ok(Mat4::new(
        2. / (right - left), 0.0, 0.0, -(right + left) / (right - left),
        0.0, 2. / (top - bottom), 0.0, -(top + bottom) / (top - bottom),
        0.0, 0.0, -2. / (far - near), -(far + near) / (far - near),
        0.0, 0.0, 0.0, 1.0,
    ))
}

/// Orthographic projection over the default [-1, 1] depth range.
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> Result<Mat4, AlgError> {
    ortho(left, right, bottom, top, -1., 1.)
}

/// OpenGL-style perspective frustum.
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, AlgError> {
    check_planes(left, right, bottom, top, near, far)?;

    Ok(Mat4::new(
        2. * near / (right - left), 0.0, (right + left) / (right - left), 0.0,
        0.0, 2. * near / (top - bottom), (top + bottom) / (top - bottom), 0.0,
        0.0, 0.0, -(far + near) / (far - near), -2. * far * near / (far - near),
        0.0, 0.0, -1.0, 0.0,
    ))
}

/// Symmetric perspective projection from a vertical field of view
/// (degrees) and aspect ratio.
pub fn perspective(fovy_deg: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4, AlgError> {
    if !(fovy_deg > 0. && fovy_deg <= 180.) {
        return Err(AlgError::InvalidRange("field of view must be in (0, 180]"));
    }

    if !(aspect > 0.) {
        return Err(AlgError::InvalidRange("aspect ratio must be positive"));
    }

    if !(far > near) {
        return Err(AlgError::InvalidRange("far must exceed near"));
    }

    let focal = 1. / (0.5 * fovy_deg).to_radians().tan();

    Ok(Mat4::new(
        focal / aspect, 0.0, 0.0, 0.0,
        0.0, focal, 0.0, 0.0,
        0.0, 0.0, (far + near) / (near - far), 2. * far * near / (near - far),
        0.0, 0.0, -1.0, 0.0,
    ))
}

/// Right-handed view matrix looking from `eye` towards `at`.
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    let forward = (eye - at).norm();
    let right = up.norm().cross(forward).norm();
    let true_up = forward.cross(right).norm();

    // Camera basis as rows is the inverse (transpose) of the camera
    // rotation; composing with the reversed eye position inverts the
    // whole camera transform
    let rotation = Mat4::from_vec3_rows(right, true_up, forward);

    rotation * translation_vec(-eye)
}

/// Inverse-transpose of the upper-left 3x3 of a model-view matrix.
///
/// A singular upper 3x3 falls back to the identity instead of failing;
/// this is the one spot a singular matrix is absorbed rather than
/// surfaced. NaN input still propagates, since a NaN determinant does
/// not compare equal to zero.
pub fn normal_matrix(model_view: &Mat4) -> Mat3 {
    match model_view.upper3().inverse() {
        Ok(inverse) => inverse.transpose(),
        Err(_) => Mat3::identity(),
    }
}
