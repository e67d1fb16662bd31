use std::path::PathBuf;

/// System-related configuration
#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub log_level: LogLevel,
    /// 額外附加寫入的日誌檔，`None` 時只輸出到 stderr
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            log_level: LogLevel::Info,
            log_file: None,
        }
    }
}
