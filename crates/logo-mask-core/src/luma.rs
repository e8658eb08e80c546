//! Perceptual luminance (ITU-R 601-2) in 16.16 fixed point.

use crate::{GrayImage, RgbaImage};

const R_WEIGHT: u32 = 19595; // 0.299 * 65536
const G_WEIGHT: u32 = 38470; // 0.587 * 65536
const B_WEIGHT: u32 = 7471; // 0.114 * 65536
const ROUND: u32 = 0x8000;

/// Luma of a single RGB triple.
///
/// The weights sum to exactly `1 << 16`, so pure white maps to 255 and pure
/// black to 0 without clamping.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + ROUND) >> 16) as u8
}

/// Extract the luminance plane of an RGBA image. Alpha is ignored.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(img), fields(width = img.width, height = img.height))
)]
pub fn luminance(img: &RgbaImage) -> GrayImage {
    let data = img.pixels().map(|px| luma(px[0], px[1], px[2])).collect();
    GrayImage {
        width: img.width,
        height: img.height,
        data,
    }
}
