use std::ops::{Add, Mul, Sub};

use crate::vec::Vec3;

/* Cubic Bezier sampling for camera paths and rotation sweeps.
 *
 * Curves are evaluated by forward differencing: the cubic is reduced to
 * three running difference accumulators, so each sample after the first
 * costs three adds per component.
 */

/// Samples the cubic through `start`, `start + ctrl_start`,
/// `end + ctrl_end`, `end` at `steps` evenly spaced parameter values.
///
/// The first sample is exactly `start`; zero steps produce an empty
/// curve and a single step produces just the start point.
pub fn bezier_curve(
    steps: usize,
    start: Vec3,
    end: Vec3,
    ctrl_start: Vec3,
    ctrl_end: Vec3,
) -> Vec<Vec3> {
    forward_differences(start, start + ctrl_start, end + ctrl_end, end, steps)
}

/// Scalar-angle variant of [`bezier_curve`], in degrees.
///
/// Interpolating a rotation angle has to pick a direction around the
/// circle; the start angle is shifted by a full turn when that gives the
/// shorter sweep (`start < end` shifts up, `start + end > 360` shifts
/// down), and every sample is folded back into [0, 360).
pub fn degrees_bezier_curve(
    steps: usize,
    start: f32,
    end: f32,
    ctrl_start: f32,
    ctrl_end: f32,
) -> Vec<f32> {
    let p0 = if start - end < 0. {
        start + 360.
    } else if start + end > 360. {
        start - 360.
    } else {
        start
    };

    let mut samples = forward_differences(p0, p0 + ctrl_start, end + ctrl_end, end, steps);

    for sample in &mut samples {
        *sample = sample.rem_euclid(360.);
    }

    samples
}

fn forward_differences<T>(p0: T, p1: T, p2: T, p3: T, steps: usize) -> Vec<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    let mut samples = Vec::with_capacity(steps);

    if steps == 0 {
        return samples;
    }

    samples.push(p0);

    if steps == 1 {
        return samples;
    }

    // Power-basis coefficients of the cubic
    let c = (p1 - p0) * 3.;
    let b = (p0 + p2 - p1 * 2.) * 3.;
    let a = p3 + (p1 - p2) * 3. - p0;

    let h = 1. / (steps - 1) as f32;
    let (h2, h3) = (h * h, h * h * h);

    let mut point = p0;
    let mut d1 = a * h3 + b * h2 + c * h;
    let mut d2 = a * (6. * h3) + b * (2. * h2);
    let d3 = a * (6. * h3);

    for _ in 1..steps {
        point = point + d1;
        d1 = d1 + d2;
        d2 = d2 + d3;

        samples.push(point);
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    // Direct Bernstein evaluation, the reference for forward differencing
    fn bernstein(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
        let u = 1. - t;

        p0 * (u * u * u) + p1 * (3. * u * u * t) + p2 * (3. * u * t * t) + p3 * (t * t * t)
    }

    #[test]
    fn empty_and_single_step() {
        let start = Vec3::new(1., 2., 3.);
        let end = Vec3::zero();

        assert!(bezier_curve(0, start, end, Vec3::zero(), Vec3::zero()).is_empty());

        let single = bezier_curve(1, start, end, Vec3::zero(), Vec3::zero());
        assert!(single == vec![start]);
    }

    #[test]
    fn matches_direct_evaluation() {
        let start = Vec3::new(0., 0., 0.);
        let end = Vec3::new(10., -4., 2.);
        let ctrl_start = Vec3::new(1., 5., 0.);
        let ctrl_end = Vec3::new(-2., 3., 1.);

        let steps = 33;
        let samples = bezier_curve(steps, start, end, ctrl_start, ctrl_end);
        assert!(samples.len() == steps);

        let (p0, p1, p2, p3) = (start, start + ctrl_start, end + ctrl_end, end);

        for (i, sample) in samples.iter().enumerate() {
            let t = i as f32 / (steps - 1) as f32;
            let expected = bernstein(p0, p1, p2, p3, t);
            let error = (*sample - expected).mag();

            assert!(error < 1e-3, "step {}: error {}", i, error);
        }
    }

    #[test]
    fn hits_endpoints() {
        let start = Vec3::new(-3., 1., 2.);
        let end = Vec3::new(4., 4., -4.);

        let samples = bezier_curve(17, start, end, Vec3::one(), -Vec3::one());

        assert!(samples[0] == start);
        assert!((samples[16] - end).mag() < 1e-3);
    }

    #[test]
    fn degrees_wrap_up() {
        // 30 -> 350 sweeps up through the 360/0 seam, not down through 180
        let samples = degrees_bezier_curve(9, 30., 350., 0., 0.);

        assert!((samples[0] - 30.).abs() < 1e-4);
        assert!((samples[8] - 350.).abs() < 1e-3);

        // Midpoint of the unwrapped sweep 390 -> 350 is 370, folded to 10
        assert!((samples[4] - 10.).abs() < 1e-2);

        for sample in &samples {
            assert!((0. ..360.).contains(sample));
        }
    }

    #[test]
    fn degrees_wrap_down() {
        // 355 -> 10 shifts the start down to -5 and sweeps up
        let samples = degrees_bezier_curve(3, 355., 10., 0., 0.);

        assert!((samples[0] - 355.).abs() < 1e-4);
        assert!((samples[2] - 10.).abs() < 1e-3);

        // Unwrapped midpoint of -5 -> 10 is 2.5
        assert!((samples[1] - 2.5).abs() < 1e-2);
    }

    #[test]
    fn degrees_no_wrap() {
        // A descending sweep inside the range takes neither shift branch
        let samples = degrees_bezier_curve(5, 180., 90., 0., 0.);

        assert!((samples[0] - 180.).abs() < 1e-4);
        assert!((samples[4] - 90.).abs() < 1e-3);
        assert!((samples[2] - 135.).abs() < 1e-2);
    }
}
