//! Logging initialization.
//!
//! Controlled by `CABLE_JOINER_LOG`:
//! - unset → plain-text events appended to the configured log file
//!   (`app.log` by default)
//! - `"stderr"` → JSON events to stderr
//! - `"off"` → no subscriber (tracing disabled)
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `[log] level`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable selecting the log sink.
pub const LOG_ENV: &str = "CABLE_JOINER_LOG";

/// Where log events ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    Off,
}

/// Pick the sink for a given `CABLE_JOINER_LOG` value.
#[must_use]
pub fn select_sink(env_value: Option<&str>, config: &LogConfig) -> LogSink {
    match env_value.map(str::trim) {
        Some("stderr") => LogSink::Stderr,
        Some("off" | "none") => LogSink::Off,
        Some(path) if !path.is_empty() && path != "file" => LogSink::File(PathBuf::from(path)),
        _ => LogSink::File(config.file.clone()),
    }
}

/// Install the global subscriber described by `config` and the environment.
///
/// Never fails: a log file that cannot be opened produces a warning on
/// stderr and logging is switched off.
pub fn init(config: &LogConfig) -> LogSink {
    let env_value = std::env::var(LOG_ENV).ok();
    match select_sink(env_value.as_deref(), config) {
        LogSink::Off => LogSink::Off,
        LogSink::Stderr => init_stderr(config),
        LogSink::File(path) => init_file(config, path),
    }
}

fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// JSON events to stderr via tracing-subscriber's JSON formatter.
fn init_stderr(config: &LogConfig) -> LogSink {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let installed = tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_ok() {
        LogSink::Stderr
    } else {
        LogSink::Off
    }
}

/// Plain-text events appended to `path`.
fn init_file(config: &LogConfig, path: PathBuf) -> LogSink {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("warning: could not create log directory {}: {e}", parent.display());
        return LogSink::Off;
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: could not open log file {}: {e}", path.display());
            return LogSink::Off;
        }
    };

    let installed = tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    if installed.is_ok() {
        LogSink::File(path)
    } else {
        LogSink::Off
    }
}
