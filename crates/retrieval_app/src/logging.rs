//! Logger setup for the retrieval binary.
//!
//! Terminal output plus a log file, both with RFC 3339 timestamps.

use std::fs::{self, File};
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "logs/images_app.log";

/// Install the global logger. The log file's parent directory is created if needed.
pub fn initialize(log_file: &Path, debug: bool) -> anyhow::Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    loggers.push(create_file_logger(log_file, level, config)?);

    CombinedLogger::init(loggers).context("logger already initialized")
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> anyhow::Result<Box<WriteLogger<File>>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    Ok(WriteLogger::new(level, config, file))
}
