//! Turn a dark logo into a white-on-transparent PNG trimmed to its visible
//! pixels.
//!
//! The pixel work lives in [`core`] (`logo-mask-core`); this crate adds file
//! decoding/encoding (feature `image`), JSON config and reports, and the
//! `logo-mask` command-line tool (feature `cli`).
//!
//! ## Quickstart
//!
//! ```no_run
//! use logo_mask::{convert_file, ConvertOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = convert_file(&ConvertOptions::new("logo_black.png", "logo.png"))?;
//! println!("{}x{} at {:?}", report.output_width, report.output_height, report.bbox);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `logo_mask::core`: buffers, luminance, compositing, trimming.
//! - `logo_mask::io` (feature `image`): `decode_rgba`, `save_png`, `encode_png`.
//! - `logo_mask::convert_file` (feature `image`): the end-to-end conversion.
//! - [`ConvertConfig`] / [`ConversionReport`]: JSON config and run summary.

pub use logo_mask_core as core;

pub use logo_mask_core::{whiten, EmptyPolicy, PixelRect, RgbaImage, Whitened};

mod config;
mod report;

#[cfg(feature = "image")]
mod convert;
#[cfg(feature = "image")]
pub mod io;

pub use config::{ConvertConfig, ConvertOptions, JsonFileError};
pub use report::ConversionReport;

#[cfg(feature = "image")]
pub use convert::convert_file;

/// Errors produced by the conversion helpers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[cfg(feature = "image")]
    #[error(transparent)]
    Decode(#[from] io::DecodeError),

    #[cfg(feature = "image")]
    #[error(transparent)]
    Encode(#[from] io::EncodeError),

    #[error(transparent)]
    Convert(#[from] logo_mask_core::ConvertError),

    #[error(transparent)]
    Json(#[from] JsonFileError),

    #[error("no {0} path given")]
    MissingPath(&'static str),
}
