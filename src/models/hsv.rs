//! Model a color with the HSV notation in the sRGB color space.

use crate::{color::Component, convert, math::Precision, models::Srgb};

tincture_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space. The
    /// hue is a fraction of a full turn.
    pub struct Hsv<T = Component> {
        /// The hue component of the color.
        hue: T,
        /// The saturation component of the color.
        saturation: T,
        /// The value component of the color.
        value: T,
    }
}

impl<T: Precision> Hsv<T> {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb<T> {
        convert::hsv_to_rgb(self.to_components()).into()
    }
}
