//! JSON configuration for a conversion run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use logo_mask_core::EmptyPolicy;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Errors reading or writing JSON files (configs and reports).
#[derive(thiserror::Error, Debug)]
pub enum JsonFileError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    let raw = fs::read_to_string(path).map_err(|source| JsonFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| JsonFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), JsonFileError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| JsonFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| JsonFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fully resolved inputs of [`crate::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub on_empty: EmptyPolicy,
    /// Where to write a [`crate::ConversionReport`], if anywhere.
    pub report: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            on_empty: EmptyPolicy::default(),
            report: None,
        }
    }

    pub fn with_on_empty(mut self, on_empty: EmptyPolicy) -> Self {
        self.on_empty = on_empty;
        self
    }

    pub fn with_report(mut self, report: impl Into<PathBuf>) -> Self {
        self.report = Some(report.into());
        self
    }
}

/// Partial run settings, as stored in a JSON config file.
///
/// ```json
/// { "input_path": "logo_black.png", "output_path": "logo.png", "on_empty": "reject" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    #[serde(default)]
    pub input_path: Option<PathBuf>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub on_empty: Option<EmptyPolicy>,
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl ConvertConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, JsonFileError> {
        read_json(path.as_ref())
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), JsonFileError> {
        write_json(self, path.as_ref())
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(self, overrides: ConvertConfig) -> ConvertConfig {
        ConvertConfig {
            input_path: overrides.input_path.or(self.input_path),
            output_path: overrides.output_path.or(self.output_path),
            on_empty: overrides.on_empty.or(self.on_empty),
            report_path: overrides.report_path.or(self.report_path),
        }
    }

    /// Resolve into runnable options. Both paths are required.
    pub fn resolve(self) -> Result<ConvertOptions, Error> {
        let input = self.input_path.ok_or(Error::MissingPath("input"))?;
        let output = self.output_path.ok_or(Error::MissingPath("output"))?;
        Ok(ConvertOptions {
            input,
            output,
            on_empty: self.on_empty.unwrap_or_default(),
            report: self.report_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_values_override_file_values() {
        let file: ConvertConfig = serde_json::from_str(
            r#"{ "input_path": "a.png", "output_path": "b.png", "on_empty": "reject" }"#,
        )
        .expect("parse");
        let cli = ConvertConfig {
            output_path: Some(PathBuf::from("c.png")),
            ..ConvertConfig::default()
        };

        let opts = file.merged_with(cli).resolve().expect("resolve");
        assert_eq!(opts.input, PathBuf::from("a.png"));
        assert_eq!(opts.output, PathBuf::from("c.png"));
        assert_eq!(opts.on_empty, EmptyPolicy::Reject);
        assert_eq!(opts.report, None);
    }

    #[test]
    fn missing_paths_are_reported_by_name() {
        let err = ConvertConfig {
            input_path: Some(PathBuf::from("a.png")),
            ..ConvertConfig::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, Error::MissingPath("output")));
        assert_eq!(err.to_string(), "no output path given");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<ConvertConfig, _> = serde_json::from_str(r#"{ "input": "a.png" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn written_config_loads_back_unchanged() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("config.json");
        let cfg = ConvertConfig {
            input_path: Some(PathBuf::from("logo_black.png")),
            output_path: Some(PathBuf::from("logo.png")),
            on_empty: Some(EmptyPolicy::Reject),
            report_path: None,
        };

        cfg.write_json(&path).expect("write config");
        let text = std::fs::read_to_string(&path).expect("read config");
        assert!(text.contains(r#""on_empty": "reject""#), "{text}");
        assert_eq!(ConvertConfig::load_json(&path).expect("load config"), cfg);
    }

    #[test]
    fn unreadable_config_names_the_file() {
        let err = ConvertConfig::load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, JsonFileError::Io { .. }), "got {err:?}");
        assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
    }

    #[test]
    fn defaults_keep_empty_images() {
        let opts = ConvertOptions::new("in.png", "out.png");
        assert_eq!(opts.on_empty, EmptyPolicy::Keep);
        assert_eq!(
            opts.with_report("r.json").report,
            Some(PathBuf::from("r.json"))
        );
    }
}
