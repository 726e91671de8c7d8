//! Models for CIE-Lab, both in its natural range and remapped into [0, 1] for
//! storage in normalized texture formats.

use crate::{
    color::Component,
    convert,
    math::Precision,
    models::{Srgb, Xyz},
};

tincture_macros::gen_model! {
    /// A color in the CIE-Lab color space. Lightness is in [0, 100], a and b
    /// are roughly in [-127, 127].
    pub struct Lab<T = Component> {
        /// The lightness component.
        lightness: T,
        /// The a component.
        a: T,
        /// The b component.
        b: T,
    }
}

impl<T: Precision> Lab<T> {
    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz<T> {
        convert::lab_to_xyz(self.to_components()).into()
    }

    /// Remap this color into [0, 1] on every axis.
    pub fn normalize(&self) -> NormalizedLab<T> {
        convert::normalize_lab(self.to_components()).into()
    }
}

tincture_macros::gen_model! {
    /// A CIE-Lab color with every component remapped into [0, 1]: lightness
    /// divided by 100, a and b mapped from [-127, 127].
    pub struct NormalizedLab<T = Component> {
        /// The lightness component.
        lightness: T,
        /// The a component.
        a: T,
        /// The b component.
        b: T,
    }
}

impl<T: Precision> NormalizedLab<T> {
    /// Undo the remap, returning the color in its natural range.
    pub fn denormalize(&self) -> Lab<T> {
        convert::denormalize_lab(self.to_components()).into()
    }

    /// Convert this color to gamma encoded sRGB.
    pub fn to_srgb(&self) -> Srgb<T> {
        convert::lab_to_rgb(self.to_components()).into()
    }
}
