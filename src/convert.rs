//! Per-sample conversions between sRGB, HSL, HSV, CIE-XYZ and CIE-Lab.
//!
//! Every function takes one color and returns one color. They hold no state
//! and never fail: out of range input is clamped or guarded with an epsilon,
//! never rejected. Only the HSL pair clamps its input; the HSV and CIE paths
//! take the components as given.
//!
//! All hues are expressed as a fraction of a full turn, in [0, 1).
//!
//! ```rust
//! use tincture::{convert, Components};
//! let hsl = convert::rgb_to_hsl(Components(1.0_f32, 0.0, 0.0));
//! assert_eq!(hsl, Components(0.0, 1.0, 0.5));
//! ```

use crate::{
    color::Components,
    math::{fract, mix, saturate, transform, transform_3x3, Precision},
};

/// The D65 reference white, scaled to a luminance of 100.
const WHITE_POINT: Components<f64> = Components(95.047, 100.0, 108.883);

/// Scale of the CIE-XYZ components produced by [`rgb_to_xyz`].
const XYZ_SCALE: f64 = 100.0;

/// Largest magnitude of the Lab a and b axes when remapped into [0, 1].
const LAB_AB_RANGE: f64 = 127.0;

// Transfer function of CIE-Lab.
const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;
// Cube root of `LAB_EPSILON`, the threshold on the inverse side.
const LAB_INVERSE_EPSILON: f64 = 0.206897;

/// Convert from RGB to HSL. The input is clamped to [0, 1] first.
///
/// The maximum channel is kept at least `T::HSL_EPSILON` above the minimum so
/// that grays never divide by zero. Their hue is meaningless and their
/// saturation is close to, but not exactly, zero.
pub fn rgb_to_hsl<T: Precision>(from: Components<T>) -> Components<T> {
    let Components(red, green, blue) = from.map(saturate);
    let two = T::lit(2.0);

    let min = red.min(green.min(blue));
    let max = red.max(green.max(blue));
    let max = max.max(min + T::HSL_EPSILON);
    let delta = max - min;

    let lightness = (min + max) / two;

    let saturation = if lightness < T::lit(0.5) {
        delta / (max + min)
    } else {
        delta / (two - max - min)
    };

    let hue = if max == red {
        (green - blue) / delta
    } else if max == green {
        two + (blue - red) / delta
    } else {
        T::lit(4.0) + (red - green) / delta
    };
    let hue = hue / T::lit(6.0);
    let hue = if hue < T::zero() { hue + T::one() } else { hue };

    Components(hue, saturation, lightness)
}

/// Convert from HSL to RGB. The input is clamped to [0, 1] first.
pub fn hsl_to_rgb<T: Precision>(from: Components<T>) -> Components<T> {
    let Components(hue, saturation, lightness) = from.map(saturate);

    if saturation <= T::zero() {
        return Components(lightness, lightness, lightness);
    }

    let q = if lightness < T::lit(0.5) {
        lightness * (T::one() + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = T::lit(2.0) * lightness - q;

    let third = T::lit(1.0 / 3.0);
    Components(
        hue_to_channel(p, q, hue + third),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - third),
    )
}

/// Evaluate one RGB channel of an HSL color at hue `t`. `t` must be within
/// one turn of [0, 1].
fn hue_to_channel<T: Precision>(p: T, q: T, t: T) -> T {
    let t = if t < T::zero() { t + T::one() } else { t };
    let t = if t > T::one() { t - T::one() } else { t };

    let six = T::lit(6.0);
    let two_thirds = T::lit(2.0 / 3.0);

    if t < T::lit(1.0 / 6.0) {
        p + (q - p) * six * t
    } else if t < T::lit(0.5) {
        q
    } else if t < two_thirds {
        p + (q - p) * (two_thirds - t) * six
    } else {
        p
    }
}

/// Convert from RGB to HSV.
///
/// The channels are sorted with two comparisons instead of a separate min and
/// max search: first green against blue, then the larger of those against
/// red. `T::HSV_EPSILON` keeps both divisions finite for black and grays.
pub fn rgb_to_hsv<T: Precision>(from: Components<T>) -> Components<T> {
    let Components(red, green, blue) = from;
    let (zero, one) = (T::zero(), T::one());
    let epsilon = T::HSV_EPSILON;

    // (larger, smaller, hue offset if red is the max, hue offset otherwise)
    let (high, low, red_offset, offset) = if green >= blue {
        (green, blue, zero, T::lit(-1.0 / 3.0))
    } else {
        (blue, green, -one, T::lit(2.0 / 3.0))
    };

    // (max, hue offset, the channel that lost against the max)
    let (max, offset, other) = if red >= high {
        (red, red_offset, high)
    } else {
        (high, offset, red)
    };

    let chroma = max - other.min(low);

    let hue = (offset + (other - low) / (T::lit(6.0) * chroma + epsilon)).abs();
    let saturation = chroma / (max + epsilon);

    Components(hue, saturation, max)
}

/// Convert from HSV to RGB. Zero saturation needs no special case, the
/// general form already collapses to a gray of the given value.
pub fn hsv_to_rgb<T: Precision>(from: Components<T>) -> Components<T> {
    let Components(hue, saturation, value) = from;
    let one = T::one();
    let (six, three) = (T::lit(6.0), T::lit(3.0));

    let channel = |offset: T| {
        let p = (fract(hue + offset) * six - three).abs();
        value * mix(one, num_traits::clamp(p - one, T::zero(), one), saturation)
    };

    Components(
        channel(one),
        channel(T::lit(2.0 / 3.0)),
        channel(T::lit(1.0 / 3.0)),
    )
}

/// Convert gamma encoded sRGB to CIE-XYZ (D65), scaled so that white has a
/// luminance of 100.
pub fn rgb_to_xyz<T: Precision>(from: Components<T>) -> Components<T> {
    let linear = from.map(|value| {
        if value > T::lit(0.04045) {
            ((value + T::lit(0.055)) / T::lit(1.055)).powf(T::lit(2.4))
        } else {
            value / T::lit(12.92)
        }
    });

    #[rustfmt::skip]
    let to_xyz = transform_3x3(
        0.4124, 0.2126, 0.0193,
        0.3576, 0.7152, 0.1192,
        0.1805, 0.0722, 0.9505,
    );

    transform(&to_xyz, linear).map(|v| v * T::lit(XYZ_SCALE))
}

/// Convert CIE-XYZ (D65, scaled to 100) to gamma encoded sRGB. The result is
/// not clamped; colors outside the sRGB gamut produce components outside of
/// [0, 1].
pub fn xyz_to_rgb<T: Precision>(from: Components<T>) -> Components<T> {
    #[rustfmt::skip]
    let from_xyz = transform_3x3(
         3.2406, -0.9689,  0.0557,
        -1.5372,  1.8758, -0.2040,
        -0.4986,  0.0415,  1.0570,
    );

    let linear = transform(&from_xyz, from.map(|v| v / T::lit(XYZ_SCALE)));

    linear.map(|value| {
        if value > T::lit(0.0031308) {
            T::lit(1.055) * value.powf(T::lit(1.0 / 2.4)) - T::lit(0.055)
        } else {
            T::lit(12.92) * value
        }
    })
}

/// Convert CIE-XYZ (D65, scaled to 100) to CIE-Lab.
pub fn xyz_to_lab<T: Precision>(from: Components<T>) -> Components<T> {
    let white = WHITE_POINT.map(T::lit);

    let Components(fx, fy, fz) = from.zip_with(&white, |v, w| v / w).map(|n| {
        if n > T::lit(LAB_EPSILON) {
            n.cbrt()
        } else {
            T::lit(LAB_SLOPE) * n + T::lit(LAB_OFFSET)
        }
    });

    Components(
        T::lit(116.0) * fy - T::lit(16.0),
        T::lit(500.0) * (fx - fy),
        T::lit(200.0) * (fy - fz),
    )
}

/// Convert CIE-Lab to CIE-XYZ (D65, scaled to 100).
pub fn lab_to_xyz<T: Precision>(from: Components<T>) -> Components<T> {
    let Components(lightness, a, b) = from;

    let fy = (lightness + T::lit(16.0)) / T::lit(116.0);
    let fx = a / T::lit(500.0) + fy;
    let fz = fy - b / T::lit(200.0);

    let white = WHITE_POINT.map(T::lit);

    Components(fx, fy, fz)
        .map(|f| {
            if f > T::lit(LAB_INVERSE_EPSILON) {
                f * f * f
            } else {
                (f - T::lit(LAB_OFFSET)) / T::lit(LAB_SLOPE)
            }
        })
        .zip_with(&white, |v, w| v * w)
}

/// Remap CIE-Lab into [0, 1] on every axis for storage in normalized texture
/// formats. Lightness is divided by 100; a and b are mapped from
/// [-127, 127] to [0, 1].
pub fn normalize_lab<T: Precision>(lab: Components<T>) -> Components<T> {
    let Components(lightness, a, b) = lab;
    let half = T::lit(0.5);
    let range = T::lit(LAB_AB_RANGE);

    Components(
        lightness / T::lit(100.0),
        half + half * (a / range),
        half + half * (b / range),
    )
}

/// Undo [`normalize_lab`].
pub fn denormalize_lab<T: Precision>(normalized: Components<T>) -> Components<T> {
    let Components(lightness, a, b) = normalized;
    let half = T::lit(0.5);
    let span = T::lit(2.0 * LAB_AB_RANGE);

    Components(
        T::lit(100.0) * lightness,
        span * (a - half),
        span * (b - half),
    )
}

/// Convert gamma encoded sRGB to CIE-Lab in its normalized storage form, see
/// [`normalize_lab`].
pub fn rgb_to_lab<T: Precision>(from: Components<T>) -> Components<T> {
    normalize_lab(xyz_to_lab(rgb_to_xyz(from)))
}

/// Convert CIE-Lab in its normalized storage form back to gamma encoded
/// sRGB.
pub fn lab_to_rgb<T: Precision>(from: Components<T>) -> Components<T> {
    xyz_to_rgb(lab_to_xyz(denormalize_lab(from)))
}
