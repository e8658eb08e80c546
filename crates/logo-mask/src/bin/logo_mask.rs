use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use logo_mask::{convert_file, ConversionReport, ConvertConfig, EmptyPolicy, Error};

#[cfg(feature = "tracing")]
use logo_mask::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use logo_mask::core::init_with_level;

/// Turn a dark logo into a white-on-transparent PNG trimmed to its visible pixels.
#[derive(Parser, Debug)]
#[command(name = "logo-mask", version, about)]
struct Cli {
    /// Input image (PNG, JPEG, WebP, ...). Overrides `input_path` from --config.
    input: Option<PathBuf>,

    /// Output PNG, replaced if it exists. Overrides `output_path` from --config.
    output: Option<PathBuf>,

    /// JSON config with `input_path`, `output_path`, `on_empty`, `report_path`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What to do when no pixel stays visible: `keep` (write it uncropped) or `reject`.
    #[arg(long, value_name = "POLICY")]
    on_empty: Option<EmptyPolicy>,

    /// Write a JSON summary of the conversion here.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    /// Emit JSON log lines.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    if let Err(err) = init_with_level(cli.log_level) {
        eprintln!("warning: logger not installed: {err}");
    }

    #[cfg(feature = "tracing")]
    init_tracing(cli.log_json, cli.log_level);

    match run(cli) {
        Ok(report) => {
            println!("saved white logo to {}", report.output_path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ConversionReport, Error> {
    let file_cfg = match &cli.config {
        Some(path) => ConvertConfig::load_json(path)?,
        None => ConvertConfig::default(),
    };
    let cli_cfg = ConvertConfig {
        input_path: cli.input,
        output_path: cli.output,
        on_empty: cli.on_empty,
        report_path: cli.report,
    };

    let opts = file_cfg.merged_with(cli_cfg).resolve()?;
    convert_file(&opts)
}
