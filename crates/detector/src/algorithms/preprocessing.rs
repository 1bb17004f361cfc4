use image::{imageops, DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use crate::{
    error::{DetectorError, Result},
    traits::ImagePreprocessor,
};

// BT.601 luma weights in 14-bit fixed point (sum to 1 << 14).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Collapse any supported layout to a single 8-bit channel.
pub fn to_grayscale(image: &DynamicImage) -> Result<GrayImage> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(gray.clone()),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => Ok(image.to_luma8()),
        DynamicImage::ImageRgb8(rgb) => Ok(rgb_to_luma(rgb)),
        DynamicImage::ImageRgba8(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => Ok(rgb_to_luma(&image.to_rgb8())),
        other => Err(DetectorError::UnsupportedLayout(format!(
            "{:?}",
            other.color()
        ))),
    }
}

fn rgb_to_luma(rgb: &RgbImage) -> GrayImage {
    imageproc::map::map_colors(rgb, |p: Rgb<u8>| {
        let [r, g, b] = p.0;
        let y = (r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B
            + (1 << (LUMA_SHIFT - 1)))
            >> LUMA_SHIFT;
        Luma([y as u8])
    })
}

/// 3x3 Gaussian smoothing with the fixed `[1, 2, 1]` kernel.
///
/// Borders are mirrored without repeating the edge pixel.
#[derive(Debug, Clone, Default)]
pub struct GaussianBlur3x3;

// [1, 2, 1] outer product; the weights sum to 16.
const KERNEL: [i32; 9] = [1, 2, 1, 2, 4, 2, 1, 2, 1];

/// Reflect-101 index: `-1` maps to `1`, `len` maps to `len - 2`.
fn mirror(i: i64, len: u32) -> u32 {
    let n = len as i64;
    if n == 1 {
        return 0;
    }
    let j = if i < 0 {
        -i
    } else if i >= n {
        2 * n - 2 - i
    } else {
        i
    };
    j as u32
}

/// One pixel of reflect-101 border on every side.
fn pad_mirrored(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width + 2, height + 2, |x, y| {
        *image.get_pixel(
            mirror(x as i64 - 1, width),
            mirror(y as i64 - 1, height),
        )
    })
}

impl ImagePreprocessor for GaussianBlur3x3 {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Ok(image.clone());
        }

        // Sums stay scaled by 16 so the final division can round half up.
        let padded = pad_mirrored(image);
        let sums = imageproc::filter::filter3x3::<Luma<u8>, i32, i32>(&padded, &KERNEL);
        let interior = imageops::crop_imm(&sums, 1, 1, width, height).to_image();

        Ok(imageproc::map::map_colors(&interior, |p: Luma<i32>| {
            Luma([((p[0] + 8) >> 4) as u8])
        }))
    }
}

/// Fixed binary threshold: `pixel > min` becomes `max`, everything else 0.
#[derive(Debug, Clone)]
pub struct BinaryThreshold {
    pub min: i32,
    pub max: i32,
}

impl BinaryThreshold {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn high_value(&self) -> u8 {
        self.max.clamp(0, u8::MAX as i32) as u8
    }
}

impl ImagePreprocessor for BinaryThreshold {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let high = self.high_value();
        Ok(imageproc::map::map_colors(image, |p: Luma<u8>| {
            if p[0] as i32 > self.min {
                Luma([high])
            } else {
                Luma([0u8])
            }
        }))
    }
}
