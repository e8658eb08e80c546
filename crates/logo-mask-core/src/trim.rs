//! Bounding box of visible pixels and the crop that removes transparent borders.

use crate::{ImageBufferError, PixelRect, RgbaImage};

/// Smallest rectangle containing every pixel with non-zero alpha.
///
/// Returns `None` when the image is fully transparent (or has no pixels).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(img), fields(width = img.width, height = img.height))
)]
pub fn alpha_bbox(img: &RgbaImage) -> Option<PixelRect> {
    let mut min_x = img.width;
    let mut min_y = img.height;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    let mut found = false;

    for (y, row) in img
        .data
        .chunks_exact(img.width.max(1) * RgbaImage::CHANNELS)
        .enumerate()
    {
        let mut first = None;
        let mut last = 0usize;
        for (x, px) in row.chunks_exact(RgbaImage::CHANNELS).enumerate() {
            if px[3] != 0 {
                if first.is_none() {
                    first = Some(x);
                }
                last = x;
            }
        }
        let Some(first) = first else {
            continue;
        };
        found = true;
        min_x = min_x.min(first);
        max_x = max_x.max(last);
        min_y = min_y.min(y);
        max_y = y;
    }

    found.then_some(PixelRect {
        left: min_x,
        top: min_y,
        right: max_x + 1,
        bottom: max_y + 1,
    })
}

/// Crop `img` to its visible pixels.
///
/// A fully transparent image is returned unchanged together with `None`.
pub fn trim_transparent(img: RgbaImage) -> Result<(RgbaImage, Option<PixelRect>), ImageBufferError> {
    match alpha_bbox(&img) {
        Some(rect) if rect == img.bounds() => Ok((img, Some(rect))),
        Some(rect) => Ok((img.crop(rect)?, Some(rect))),
        None => Ok((img, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_visible(width: usize, height: usize, visible: &[(usize, usize)]) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if visible.contains(&(x, y)) {
                [255, 255, 255, 200]
            } else {
                [255, 255, 255, 0]
            }
        })
    }

    #[test]
    fn fully_transparent_has_no_bbox() {
        let img = with_visible(4, 4, &[]);
        assert_eq!(alpha_bbox(&img), None);

        let (out, rect) = trim_transparent(img.clone()).expect("trim");
        assert!(rect.is_none());
        assert_eq!(out, img);
    }

    #[test]
    fn bbox_is_minimal_and_exclusive() {
        let img = with_visible(6, 5, &[(1, 3), (4, 1), (2, 2)]);
        let rect = alpha_bbox(&img).expect("bbox");
        assert_eq!(
            rect,
            PixelRect {
                left: 1,
                top: 1,
                right: 5,
                bottom: 4,
            }
        );
    }

    #[test]
    fn single_pixel_bbox() {
        let img = with_visible(3, 3, &[(1, 1)]);
        let (out, rect) = trim_transparent(img).expect("trim");
        assert_eq!(rect.map(|r| (r.width(), r.height())), Some((1, 1)));
        assert_eq!((out.width, out.height), (1, 1));
        assert_eq!(out.pixel(0, 0), [255, 255, 255, 200]);
    }

    #[test]
    fn trimmed_edges_each_touch_visible_pixels() {
        let img = with_visible(9, 7, &[(2, 5), (6, 2), (3, 3)]);
        let (out, _) = trim_transparent(img).expect("trim");

        let row_visible = |y: usize| (0..out.width).any(|x| out.alpha(x, y) > 0);
        let col_visible = |x: usize| (0..out.height).any(|y| out.alpha(x, y) > 0);
        assert!(row_visible(0));
        assert!(row_visible(out.height - 1));
        assert!(col_visible(0));
        assert!(col_visible(out.width - 1));
    }

    #[test]
    fn opaque_image_keeps_its_size() {
        let img = RgbaImage::filled(2, 2, [255, 255, 255, 255]).expect("filled");
        let (out, rect) = trim_transparent(img.clone()).expect("trim");
        assert_eq!(rect, Some(img.bounds()));
        assert_eq!(out, img);
    }
}
