use crate::{GrayImage, RgbaImage};

/// Colour channels written under the alpha mask.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Solid white image whose alpha channel is `mask`.
///
/// The result has the mask's dimensions; R, G and B are 255 everywhere.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(mask), fields(width = mask.width, height = mask.height))
)]
pub fn white_with_alpha(mask: &GrayImage) -> RgbaImage {
    let mut data = Vec::with_capacity(mask.data.len() * RgbaImage::CHANNELS);
    for &a in &mask.data {
        data.extend_from_slice(&[WHITE[0], WHITE[1], WHITE[2], a]);
    }
    RgbaImage {
        width: mask.width,
        height: mask.height,
        data,
    }
}
