use crate::error::{CliError, Result as CliResult};

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use a0_config::LogLevel;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, debug};

/// Where log lines go. Stdout is reserved for command output.
pub(crate) enum Target {
    File(PathBuf),
    Stderr { colored: bool },
}

impl Target {
    pub(crate) fn new(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Target::File(path),
            None => Target::Stderr { colored },
        }
    }

    fn output(&self) -> CliResult<fern::Output> {
        match self {
            Target::File(path) => Ok(open_log_file(path)?.into()),
            Target::Stderr { .. } => Ok(std::io::stderr().into()),
        }
    }

    pub(crate) fn colors(&self) -> Option<ColoredLevelConfig> {
        match self {
            Target::Stderr { colored: true } => Some(
                ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red),
            ),
            _ => None,
        }
    }
}

pub(crate) fn open_log_file(path: &Path) -> CliResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// `[<rfc3339> - <level>] <message>`; file lines also carry the source location.
fn write_line(
    out: FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    colors: Option<&ColoredLevelConfig>,
    with_location: bool,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let level = match colors {
        Some(colors) => colors.color(record.level()).to_string(),
        None => record.level().to_string(),
    };

    if with_location {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{}:{}]",
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    } else {
        out.finish(format_args!("[{date} - {level}] {message}"))
    }
}

/// Install the global fern logger.
///
/// `log_file` = None logs to stderr, colored when `colored` is set.
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let target = Target::new(log_file, colored);
    let colors = target.colors();
    let with_location = matches!(target, Target::File(_));

    Dispatch::new()
        .level(log_level.filter())
        .format(move |out, message, record| {
            write_line(out, message, record, colors.as_ref(), with_location)
        })
        .chain(target.output()?)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match target {
        Target::File(ref path) => debug!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        Target::Stderr { .. } => debug!("Logger initialized: level={}, stderr", log_level),
    }

    Ok(())
}
