//! Render a strip of ramps through each conversion pair into a PNG, one band
//! per ramp. Useful to eyeball the conversions for banding or discontinuities.

use tincture::{Component, Hsl, Hsv, NormalizedLab, Srgb};

use image::{Rgb, RgbImage};

const WIDTH: u32 = 1000;
const HEIGHT_PER_RAMP: u32 = 60;

type Ramp = fn(Component) -> Srgb;

fn main() -> Result<(), image::ImageError> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "ramps.png".to_owned());

    let ramps: [(&str, Ramp); 6] = [
        ("hsl hue", |t| Hsl::new(t, 1.0, 0.5).to_srgb()),
        ("hsl lightness", |t| Hsl::new(0.6, 0.8, t).to_srgb()),
        ("hsv hue", |t| Hsv::new(t, 1.0, 1.0).to_srgb()),
        ("hsv saturation", |t| Hsv::new(0.1, t, 0.9).to_srgb()),
        ("lab lightness", |t| NormalizedLab::new(t, 0.5, 0.5).to_srgb()),
        ("lab a axis", |t| NormalizedLab::new(0.6, t, 0.5).to_srgb()),
    ];

    let height = ramps.len() as u32 * HEIGHT_PER_RAMP;
    let mut img = RgbImage::new(WIDTH, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = x as Component / (WIDTH - 1) as Component;
        let (_, ramp) = ramps[(y / HEIGHT_PER_RAMP) as usize];
        *pixel = to_pixel(ramp(t));
    }

    for (i, (name, _)) in ramps.iter().enumerate() {
        println!("band {i}: {name}");
    }

    img.save(&path)?;
    println!("wrote {path}");

    Ok(())
}

/// Quantize a color to 8 bits per channel. Lab ramps leave the sRGB gamut, so
/// the components are clipped first.
fn to_pixel(color: Srgb) -> Rgb<u8> {
    let quantize = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([quantize(color.red), quantize(color.green), quantize(color.blue)])
}
