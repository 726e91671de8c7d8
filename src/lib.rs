//! tincture provides the per-sample color space conversions used by image
//! processing pipelines: sRGB to and from HSL, HSV, CIE-XYZ and CIE-Lab.
//!
//! Every conversion is a pure function over three components, generic over
//! the floating point [`Precision`] it runs in. Nothing allocates, nothing is
//! shared between calls, so conversions can run per pixel from any number of
//! threads.
//!
//! ```rust
//! use tincture::Srgb;
//! let hsv = Srgb::<f32>::new(1.0, 0.0, 0.0).to_hsv();
//! assert_eq!(hsv.value, 1.0);
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
mod math;
pub mod models;


pub use color::{Component, Components};
pub use math::Precision;
pub use models::{Hsl, Hsv, Lab, NormalizedLab, Srgb, Xyz};
