use log::{info, warn};
use logo_mask_core::whiten;

use crate::io::{decode_rgba, save_png};
use crate::{ConversionReport, ConvertOptions, Error};

/// Decode `opts.input`, whiten and trim it, and write `opts.output`.
///
/// With [`logo_mask_core::EmptyPolicy::Reject`] a fully transparent result
/// fails before anything is written. A report that cannot be written is
/// logged and skipped; the converted logo is already on disk by then.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "info",
        skip(opts),
        fields(input = %opts.input.display(), output = %opts.output.display())
    )
)]
pub fn convert_file(opts: &ConvertOptions) -> Result<ConversionReport, Error> {
    let src = decode_rgba(&opts.input)?;
    let result = whiten(&src, opts.on_empty)?;
    save_png(&result.image, &opts.output)?;
    info!(
        "wrote {}x{} logo to {}",
        result.image.width,
        result.image.height,
        opts.output.display()
    );

    let report = ConversionReport::new(&opts.input, &opts.output, opts.on_empty, &result);
    if let Some(path) = &opts.report {
        match report.write_json(path) {
            Ok(()) => info!("wrote report JSON to {}", path.display()),
            Err(err) => warn!("report not written: {err}"),
        }
    }
    Ok(report)
}
