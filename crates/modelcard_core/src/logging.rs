//! Rolling file logging for the aggregator.
//!
//! # Responsibility
//! - Start the `flexi_logger` file backend once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Re-initializing with the same level and directory is a no-op.
//! - Switching level or directory after start is rejected.
//! - Initialization never panics.
//! - Events are `key=value` metadata; submitted field contents are never logged.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "modelcard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Logging setup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    CreateDir { path: PathBuf, reason: String },
    Backend(String),
    LevelConflict { active: &'static str, requested: &'static str },
    DirConflict { active: PathBuf, requested: PathBuf },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(value) => {
                write!(f, "log_dir must be an absolute path, got `{value}`")
            }
            Self::CreateDir { path, reason } => write!(
                f,
                "failed to create log directory `{}`: {reason}",
                path.display()
            ),
            Self::Backend(reason) => write!(f, "failed to start logger: {reason}"),
            Self::LevelConflict { active, requested } => write!(
                f,
                "logging already initialized with level `{active}`; refusing to switch to `{requested}`"
            ),
            Self::DirConflict { active, requested } => write!(
                f,
                "logging already initialized at `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
        }
    }
}

impl Error for LoggingError {}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported level, empty or relative directory.
/// - Directory creation or logger backend failure.
/// - A different level or directory than the active configuration.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, &log_dir))?;
    check_same_config(state, level, &log_dir)
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|err| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        reason: err.to_string(),
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();

    info!(
        "event=logging_start module=core status=ok platform={} version={} level={} log_dir={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

fn check_same_config(
    state: &LoggingState,
    level: &'static str,
    log_dir: &Path,
) -> Result<(), LoggingError> {
    if state.log_dir != log_dir {
        return Err(LoggingError::DirConflict {
            active: state.log_dir.clone(),
            requested: log_dir.to_path_buf(),
        });
    }
    if state.level != level {
        return Err(LoggingError::LevelConflict {
            active: state.level,
            requested: level,
        });
    }
    Ok(())
}

/// Returns `(level, log_dir)` of active logging, or `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Payload may echo submitted text; cap and flatten it.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
