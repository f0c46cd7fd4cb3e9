use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::error::LoggingError;

/// Where the `log` records emitted by the tree end up.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub terminal_level: LevelFilter,
    /// Also write records to this file, truncating it first.
    pub file: Option<PathBuf>,
    pub file_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            terminal_level: LevelFilter::Warn,
            file: None,
            file_level: LevelFilter::Info,
        }
    }
}

/// Installs the global logger. Can only succeed once per process.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.terminal_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.file {
        let file = File::create(path).map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(config.file_level, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
