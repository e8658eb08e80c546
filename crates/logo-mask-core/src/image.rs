use serde::{Deserialize, Serialize};

/// Errors raised when building or slicing pixel buffers.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("invalid buffer length for {width}x{height}x{channels} (expected {expected} bytes, got {got})")]
    LengthMismatch {
        width: usize,
        height: usize,
        channels: usize,
        expected: usize,
        got: usize,
    },

    #[error("image dimensions overflow (width={width}, height={height})")]
    DimensionsOverflow { width: usize, height: usize },

    #[error("crop rectangle {rect} does not fit a {width}x{height} image")]
    CropOutOfBounds {
        rect: PixelRect,
        width: usize,
        height: usize,
    },
}

/// Axis-aligned pixel rectangle. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl PixelRect {
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

impl std::fmt::Display for PixelRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn checked_len(width: usize, height: usize, channels: usize) -> Result<usize, ImageBufferError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageBufferError::DimensionsOverflow { width, height })
}

/// Single-channel 8-bit image (luminance).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = w*h
}

impl GrayImage {
    /// Build from an existing row-major buffer, checking its length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageBufferError> {
        let expected = checked_len(width, height, 1)?;
        if data.len() != expected {
            return Err(ImageBufferError::LengthMismatch {
                width,
                height,
                channels: 1,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Four-channel 8-bit image, interleaved `R, G, B, A`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = w*h*4
}

impl RgbaImage {
    pub const CHANNELS: usize = 4;

    /// Build from an existing row-major RGBA buffer, checking its length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageBufferError> {
        let expected = checked_len(width, height, Self::CHANNELS)?;
        if data.len() != expected {
            return Err(ImageBufferError::LengthMismatch {
                width,
                height,
                channels: Self::CHANNELS,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image of the given size with every pixel set to `px`.
    pub fn filled(width: usize, height: usize, px: [u8; 4]) -> Result<Self, ImageBufferError> {
        let len = checked_len(width, height, Self::CHANNELS)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&px);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width * height * Self::CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * Self::CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.data[(y * self.width + x) * Self::CHANNELS + 3]
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(Self::CHANNELS)
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect {
            left: 0,
            top: 0,
            right: self.width,
            bottom: self.height,
        }
    }

    /// Copy the pixels inside `rect` into a new image.
    pub fn crop(&self, rect: PixelRect) -> Result<RgbaImage, ImageBufferError> {
        if rect.is_empty() || rect.right > self.width || rect.bottom > self.height {
            return Err(ImageBufferError::CropOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }

        let row_bytes = rect.width() * Self::CHANNELS;
        let mut data = Vec::with_capacity(row_bytes * rect.height());
        for y in rect.top..rect.bottom {
            let start = (y * self.width + rect.left) * Self::CHANNELS;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }

        Ok(RgbaImage {
            width: rect.width(),
            height: rect.height(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_short_buffers() {
        let err = RgbaImage::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            ImageBufferError::LengthMismatch {
                width: 2,
                height: 2,
                channels: 4,
                expected: 16,
                got: 15,
            }
        );
        assert!(GrayImage::from_raw(3, 1, vec![1, 2, 3]).is_ok());
    }

    #[test]
    fn crop_copies_inner_rows() {
        let img = RgbaImage::from_fn(4, 3, |x, y| [x as u8, y as u8, 0, 255]);
        let rect = PixelRect {
            left: 1,
            top: 1,
            right: 3,
            bottom: 3,
        };
        let out = img.crop(rect).expect("crop");
        assert_eq!((out.width, out.height), (2, 2));
        assert_eq!(out.pixel(0, 0), [1, 1, 0, 255]);
        assert_eq!(out.pixel(1, 1), [2, 2, 0, 255]);
    }

    #[test]
    fn crop_rejects_out_of_bounds_and_empty() {
        let img = RgbaImage::filled(2, 2, [0, 0, 0, 0]).expect("filled");
        let too_wide = PixelRect {
            left: 0,
            top: 0,
            right: 3,
            bottom: 2,
        };
        assert!(matches!(
            img.crop(too_wide),
            Err(ImageBufferError::CropOutOfBounds { .. })
        ));

        let empty = PixelRect {
            left: 1,
            top: 0,
            right: 1,
            bottom: 2,
        };
        assert!(img.crop(empty).is_err());
    }

    #[test]
    fn rect_display_lists_edges_in_order() {
        let rect = PixelRect {
            left: 1,
            top: 2,
            right: 5,
            bottom: 7,
        };
        assert_eq!(rect.to_string(), "(1, 2, 5, 7)");
        assert_eq!((rect.width(), rect.height()), (4, 5));
        assert!(rect.contains(4, 6));
        assert!(!rect.contains(5, 6));
    }
}
