use std::path::Path;

use logo_mask_core::{EmptyPolicy, PixelRect, Whitened};
use serde::{Deserialize, Serialize};

use crate::config::{read_json, write_json, JsonFileError};

/// Summary of one conversion, optionally written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input_path: String,
    pub output_path: String,
    pub source_width: usize,
    pub source_height: usize,
    pub output_width: usize,
    pub output_height: usize,
    /// Crop taken from the source, `None` when nothing was visible.
    #[serde(default)]
    pub bbox: Option<PixelRect>,
    pub fully_transparent: bool,
    pub visible_pixels: usize,
    pub on_empty: EmptyPolicy,
}

impl ConversionReport {
    pub fn new(input: &Path, output: &Path, on_empty: EmptyPolicy, result: &Whitened) -> Self {
        Self {
            input_path: input.to_string_lossy().into_owned(),
            output_path: output.to_string_lossy().into_owned(),
            source_width: result.source_width,
            source_height: result.source_height,
            output_width: result.image.width,
            output_height: result.image.height,
            bbox: result.bbox,
            fully_transparent: result.is_fully_transparent(),
            visible_pixels: result.visible_pixels(),
            on_empty,
        }
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, JsonFileError> {
        read_json(path.as_ref())
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), JsonFileError> {
        write_json(self, path.as_ref())
    }
}
