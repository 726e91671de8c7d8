//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::Components;

/// A floating point type that conversions can run in. The precision tier is
/// selected by the scalar type, including the epsilons used to guard the HSL
/// and HSV denominators.
pub trait Precision: Float {
    /// Minimum distance forced between the largest and smallest channel when
    /// deriving HSL. Must survive `min + HSL_EPSILON` for any `min` in [0, 1].
    const HSL_EPSILON: Self;

    /// Added to the HSV denominators so that zero chroma or zero value never
    /// divides by zero. Must be representable as a non-zero value in `Self`.
    const HSV_EPSILON: Self;

    /// Lift a constant into this precision.
    fn lit(value: f64) -> Self;
}

impl Precision for f32 {
    const HSL_EPSILON: Self = 1.0e-6;
    const HSV_EPSILON: Self = 1.0e-10;

    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Precision for f64 {
    const HSL_EPSILON: Self = 1.0e-6;
    const HSV_EPSILON: Self = 1.0e-10;

    fn lit(value: f64) -> Self {
        value
    }
}

#[cfg(feature = "half")]
impl Precision for half::f16 {
    // One ulp at 1.0, smaller values vanish when added to bright channels.
    const HSL_EPSILON: Self = half::f16::from_f32_const(0.0009765625);
    // 1e-10 flushes to zero in half precision, this is the smallest subnormal.
    const HSV_EPSILON: Self = half::f16::from_f32_const(5.9605e-8);

    fn lit(value: f64) -> Self {
        half::f16::from_f64(value)
    }
}

/// Clamp the value to the range [0, 1]. NaN passes through unchanged.
pub fn saturate<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}

/// The fractional part of `value`, always in [0, 1) for finite input, also
/// for negative values.
pub fn fract<T: Float>(value: T) -> T {
    value - value.floor()
}

/// Linear blend from `a` to `b`.
pub fn mix<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

pub type Transform<T> = Transform3D<T>;

/// Create a transform holding a 3x3 matrix. The arguments are taken column by
/// column, so that `x' = x * m11 + y * m21 + z * m31`.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn transform_3x3<T: Precision>(
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
) -> Transform<T> {
    let (zero, one) = (T::zero(), T::one());

    Transform3D::new(
        T::lit(m11), T::lit(m12), T::lit(m13), zero,
        T::lit(m21), T::lit(m22), T::lit(m23), zero,
        T::lit(m31), T::lit(m32), T::lit(m33), zero,
        zero,        zero,        zero,        one,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform<T: Precision>(
    transform: &Transform<T>,
    components: Components<T>,
) -> Components<T> {
    let Components(x, y, z) = components;
    let Vector3D { x, y, z, .. } = transform.transform_vector3d(Vector3D::new(x, y, z));
    Components(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_clamps_out_of_range_values() {
        assert_eq!(saturate(-0.5_f32), 0.0);
        assert_eq!(saturate(0.25_f32), 0.25);
        assert_eq!(saturate(7.0_f32), 1.0);
        assert!(saturate(f32::NAN).is_nan());
    }

    #[test]
    fn fract_wraps_negative_values_upwards() {
        assert_eq!(fract(1.25_f32), 0.25);
        assert_eq!(fract(-0.25_f32), 0.75);
        assert_eq!(fract(2.0_f32), 0.0);
    }

    #[test]
    fn mix_blends_linearly() {
        assert_eq!(mix(2.0_f32, 4.0, 0.0), 2.0);
        assert_eq!(mix(2.0_f32, 4.0, 0.5), 3.0);
        assert_eq!(mix(2.0_f32, 4.0, 1.0), 4.0);
    }

    #[test]
    fn transform_multiplies_rows_by_the_vector() {
        #[rustfmt::skip]
        let m: Transform<f64> = transform_3x3(
            1.0, 4.0, 7.0,
            2.0, 5.0, 8.0,
            3.0, 6.0, 9.0,
        );

        // | 1 2 3 |   | 1 |   | 14 |
        // | 4 5 6 | * | 2 | = | 32 |
        // | 7 8 9 |   | 3 |   | 50 |
        assert_eq!(transform(&m, Components(1.0, 2.0, 3.0)), Components(14.0, 32.0, 50.0));
    }
}
