//! Model a color in the CIE-XYZ color space.

use crate::{
    color::Component,
    convert,
    math::Precision,
    models::{Lab, Srgb},
};

tincture_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, scaled so
    /// that the reference white has a luminance (`y`) of 100.
    pub struct Xyz<T = Component> {
        /// The X component of the color.
        x: T,
        /// The Y component of the color.
        y: T,
        /// The Z component of the color.
        z: T,
    }
}

impl<T: Precision> Xyz<T> {
    /// Convert this color to gamma encoded sRGB.
    pub fn to_srgb(&self) -> Srgb<T> {
        convert::xyz_to_rgb(self.to_components()).into()
    }

    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab<T> {
        convert::xyz_to_lab(self.to_components()).into()
    }
}
