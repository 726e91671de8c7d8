//! Model a color in the sRGB color space.

use crate::{
    color::Component,
    convert,
    math::Precision,
    models::{Hsl, Hsv, NormalizedLab, Xyz},
};

tincture_macros::gen_model! {
    /// A color in the sRGB color space with gamma encoding. Components are
    /// expected in [0, 1].
    pub struct Srgb<T = Component> {
        /// The red component of the color.
        red: T,
        /// The green component of the color.
        green: T,
        /// The blue component of the color.
        blue: T,
    }
}

impl<T: Precision> Srgb<T> {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl<T> {
        convert::rgb_to_hsl(self.to_components()).into()
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv<T> {
        convert::rgb_to_hsv(self.to_components()).into()
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz<T> {
        convert::rgb_to_xyz(self.to_components()).into()
    }

    /// Convert this color to CIE-Lab, remapped for storage in [0, 1].
    pub fn to_normalized_lab(&self) -> NormalizedLab<T> {
        convert::rgb_to_lab(self.to_components()).into()
    }
}
