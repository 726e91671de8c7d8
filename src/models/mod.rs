//! Models are structs that represent a color in a specified color space or
//! form. They give a type safe path through the conversions in
//! [`crate::convert`], which otherwise operate on untyped [`Components`].
//!
//! ```rust
//! use tincture::models::Srgb;
//! let texel = Srgb::<f32>::new(0.0, 0.0, 1.0).to_normalized_lab();
//! let back = texel.to_srgb();
//! assert!((back.blue - 1.0).abs() < 1.0e-3);
//! ```
//!
//! [`Components`]: crate::Components

mod hsl;
mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{Lab, NormalizedLab};
pub use rgb::Srgb;
pub use xyz::Xyz;
