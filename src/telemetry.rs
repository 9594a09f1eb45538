//! Module for telemetry functionality such as logging

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::LevelFilter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Env variable selecting the execution mode. In `production` mode nothing is logged to the console.
pub const APP_ENV_VAR: &str = "APP_ENV";
const PRODUCTION: &str = "production";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Sets up logging.
///
/// Leveled log files are appended to in `log_dir`: `debug.log` (debug and above), `info.log`
/// (info and above) and `error.log` (errors only).
/// Unless `APP_ENV` is `production`, logs also go to stderr. The console log level is taken from
/// the `RUST_LOG` env variable (default is `info`), the console format (pretty/json) is set by the
/// `LOG_FORMAT` env variable.
pub fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let mut layers = vec![
        file_layer(&log_dir.join("debug.log"), LevelFilter::DEBUG)?,
        file_layer(&log_dir.join("info.log"), LevelFilter::INFO)?,
        file_layer(&log_dir.join("error.log"), LevelFilter::ERROR)?,
    ];

    let mode = std::env::var(APP_ENV_VAR).ok();
    if console_enabled(mode.as_deref()) {
        layers.push(console_layer());
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    debug!("Debug mode is enabled. Sensitive data might be visible.");
    Ok(())
}

pub(crate) fn console_enabled(mode: Option<&str>) -> bool {
    mode != Some(PRODUCTION)
}

fn file_layer(path: &Path, level: LevelFilter) -> Result<BoxedLayer> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(level)
        .boxed())
}

fn console_layer() -> BoxedLayer {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    if format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr) // so that we don't interfere with the std output
            .with_filter(env_filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr) // so that we don't interfere with the std output
            .with_filter(env_filter)
            .boxed()
    }
}
