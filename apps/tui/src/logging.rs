use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Routes `tracing` output to a timestamped file; the terminal belongs to the UI.
///
/// Keep the returned guard alive for the whole run or buffered lines are lost.
pub fn init_logging(log_dir: &Path, level: &str) -> Result<(PathBuf, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;
    let log_file_path = get_log_file_path(log_dir);

    let file = fs::File::create(&log_file_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_log_filter(level))
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok((log_file_path, guard))
}

fn build_log_filter(raw: &str) -> EnvFilter {
    let level = normalize_log_level(raw).unwrap_or("warn");
    EnvFilter::new(format!(
        "{level},portfolio_tui={level},portfolio_core={level}"
    ))
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

pub fn get_log_file_path(log_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    log_dir.join(format!("portfolio-slideshow-{timestamp}.log"))
}
