//! Image file decoding (any format `image` reads) and 8-bit RGBA PNG encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ::image::{ColorType, ImageReader};
use log::debug;
use logo_mask_core::{ImageBufferError, RgbaImage};

/// Errors raised while reading the input image.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("{} decodes to an empty {width}x{height} image", .path.display())]
    EmptyImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
}

/// Errors raised while writing the output PNG.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("image too large for PNG ({width}x{height})")]
    TooLarge { width: usize, height: usize },
}

/// Copy an `image::RgbaImage` into the core buffer type.
pub fn from_image_rgba(img: ::image::RgbaImage) -> Result<RgbaImage, ImageBufferError> {
    let (width, height) = img.dimensions();
    RgbaImage::from_raw(width as usize, height as usize, img.into_raw())
}

/// Expand to RGBA keeping the high byte of each 16-bit sample.
fn rgba_from_high_bytes(img: ::image::DynamicImage) -> Result<RgbaImage, ImageBufferError> {
    let wide = img.into_rgba16();
    let (width, height) = wide.dimensions();
    let data = wide.into_raw().into_iter().map(|v| (v >> 8) as u8).collect();
    RgbaImage::from_raw(width as usize, height as usize, data)
}

/// Decode `path` into an RGBA buffer.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. Grayscale, RGB and palette inputs are expanded to RGBA; for
/// animated formats only the first frame is read. 16-bit samples are
/// truncated to their high byte.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display())))]
pub fn decode_rgba(path: impl AsRef<Path>) -> Result<RgbaImage, DecodeError> {
    let path = path.as_ref();
    let open_err = |source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|source| DecodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded {} as {:?} ({:?}, {}x{})",
        path.display(),
        format,
        decoded.color(),
        decoded.width(),
        decoded.height()
    );

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    let rgba = match decoded.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
            rgba_from_high_bytes(decoded)?
        }
        _ => from_image_rgba(decoded.into_rgba8())?,
    };
    Ok(rgba)
}

/// Encode `img` as an 8-bit RGBA PNG into `writer`.
pub fn write_png<W: Write>(img: &RgbaImage, writer: W) -> Result<(), EncodeError> {
    let too_large = || EncodeError::TooLarge {
        width: img.width,
        height: img.height,
    };
    let width = u32::try_from(img.width).map_err(|_| too_large())?;
    let height = u32::try_from(img.height).map_err(|_| too_large())?;

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&img.data)?;
    png_writer.finish()?;
    Ok(())
}

/// Encode `img` as a PNG in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    write_png(img, &mut buf)?;
    Ok(buf)
}

/// Write `img` to `path` as an 8-bit RGBA PNG, replacing any existing file.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(img, path), fields(path = %path.as_ref().display())))]
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let io_err = |source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_png(img, &mut out)?;
    out.flush().map_err(io_err)?;
    debug!("wrote {}x{} PNG to {}", img.width, img.height, path.display());
    Ok(())
}
