//! Stderr logger for the command-line tool.
//!
//! Lines look like `[  0.004s  WARN logo_mask_core] message`. Install once at
//! startup with [`init_with_level`]; with the `tracing` feature use
//! [`init_tracing`] instead.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

fn crate_name<'a>(target: &'a str) -> &'a str {
    target.split("::").next().unwrap_or(target)
}

fn write_line<W: Write>(out: &mut W, elapsed: f64, record: &Record) -> std::io::Result<()> {
    writeln!(
        out,
        "[{:7.3}s {:>5} {}] {}",
        elapsed,
        record.level(),
        crate_name(record.target()),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = write_line(&mut std::io::stderr().lock(), elapsed, record);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// Only the first call installs the logger; later calls are no-ops.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` when the variable is unset or invalid.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, default_level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn lines_carry_elapsed_level_and_crate() {
        let mut out = Vec::new();
        write_line(
            &mut out,
            1.5,
            &Record::builder()
                .args(format_args!("report not written"))
                .level(Level::Warn)
                .target("logo_mask::convert")
                .build(),
        )
        .expect("write");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "[  1.500s  WARN logo_mask] report not written\n"
        );
    }

    #[test]
    fn bare_targets_are_kept_whole() {
        assert_eq!(crate_name("logo_mask_core"), "logo_mask_core");
        assert_eq!(crate_name("logo_mask_core::pipeline"), "logo_mask_core");
    }
}
