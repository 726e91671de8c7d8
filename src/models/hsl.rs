//! Model a color with the HSL notation in the sRGB color space.

use crate::{color::Component, convert, math::Precision, models::Srgb};

tincture_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space. The
    /// hue is a fraction of a full turn.
    pub struct Hsl<T = Component> {
        /// The hue component of the color.
        hue: T,
        /// The saturation component of the color.
        saturation: T,
        /// The lightness component of the color.
        lightness: T,
    }
}

impl<T: Precision> Hsl<T> {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb<T> {
        convert::hsl_to_rgb(self.to_components()).into()
    }
}
