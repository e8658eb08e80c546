//! The whole pixel transform: luminance -> alpha on white -> trim.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{luminance, trim_transparent, white_with_alpha, ImageBufferError, PixelRect, RgbaImage};

/// What to do when the converted image has no visible pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// Keep the uncropped, fully transparent image.
    #[default]
    Keep,
    /// Fail with [`ConvertError::FullyTransparent`].
    Reject,
}

impl std::str::FromStr for EmptyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown empty-image policy '{other}' (expected keep or reject)")),
        }
    }
}

/// Errors produced by [`whiten`].
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("image has no visible pixels after conversion ({width}x{height})")]
    FullyTransparent { width: usize, height: usize },

    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
}

/// Output of [`whiten`].
#[derive(Clone, Debug)]
pub struct Whitened {
    pub image: RgbaImage,
    /// Crop applied to the composited image, `None` if it was fully transparent.
    pub bbox: Option<PixelRect>,
    pub source_width: usize,
    pub source_height: usize,
}

impl Whitened {
    pub fn is_fully_transparent(&self) -> bool {
        self.bbox.is_none()
    }

    /// Number of output pixels with non-zero alpha.
    pub fn visible_pixels(&self) -> usize {
        self.image.pixels().filter(|px| px[3] != 0).count()
    }
}

/// Turn a dark-on-light logo into a white-on-transparent one, trimmed to
/// its visible pixels.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "info", skip(src), fields(width = src.width, height = src.height))
)]
pub fn whiten(src: &RgbaImage, on_empty: EmptyPolicy) -> Result<Whitened, ConvertError> {
    let mask = luminance(src);
    debug!("luminance plane {}x{}", mask.width, mask.height);

    let composited = white_with_alpha(&mask);
    let (image, bbox) = trim_transparent(composited)?;

    match bbox {
        Some(rect) => debug!(
            "trimmed {}x{} -> {}x{} at {}",
            src.width, src.height, image.width, image.height, rect
        ),
        None if on_empty == EmptyPolicy::Reject => {
            return Err(ConvertError::FullyTransparent {
                width: src.width,
                height: src.height,
            });
        }
        None => warn!(
            "no visible pixels, keeping the {}x{} image uncropped",
            image.width, image.height
        ),
    }

    Ok(Whitened {
        image,
        bbox,
        source_width: src.width,
        source_height: src.height,
    })
}
