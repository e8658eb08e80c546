//! Pixel-level core of `logo-mask`.
//!
//! A dark logo on a light or transparent background becomes a white logo on
//! a transparent background: the luminance of every pixel becomes the alpha
//! of a solid white image, which is then trimmed to its visible pixels.
//!
//! This crate does not decode or encode files; it works on plain row-major
//! buffers ([`RgbaImage`], [`GrayImage`]).

mod composite;
mod image;
mod logger;
mod luma;
mod pipeline;
mod trim;

pub use composite::{white_with_alpha, WHITE};
pub use image::{GrayImage, ImageBufferError, PixelRect, RgbaImage};
pub use luma::{luma, luminance};
pub use pipeline::{whiten, ConvertError, EmptyPolicy, Whitened};
pub use trim::{alpha_bbox, trim_transparent};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
