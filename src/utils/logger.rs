use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use log::{Level, Log, Metadata, Record};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::SystemConfig;

lazy_static! {
    static ref LOGGER: Logger = Logger::default();
}

/// 寫入 stderr 的日誌，可另外附加寫入檔案
#[derive(Debug, Default)]
pub struct Logger {
    file: Mutex<Option<File>>,
}

impl Logger {
    fn set_file(&self, file: File) {
        if let Ok(mut slot) = self.file.lock() {
            *slot = Some(file);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(&Local::now(), record.level(), record.target(), record.args());
        let _ = writeln!(io::stderr().lock(), "{}", line);

        if let Ok(mut slot) = self.file.lock() {
            if let Some(ref mut file) = *slot {
                writeln!(file, "{}", line).ok();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut slot) = self.file.lock() {
            if let Some(ref mut file) = *slot {
                file.flush().ok();
            }
        }
    }
}

/// 安裝全域日誌
///
/// 重複呼叫時只會更新等級與日誌檔。
pub fn init(config: &SystemConfig) -> io::Result<()> {
    if let Some(ref path) = config.log_file {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        LOGGER.set_file(file);
    }

    // 已經設定過 logger 時不是錯誤
    let _ = log::set_logger(&*LOGGER);
    log::set_max_level(config.log_level.into());
    Ok(())
}

fn format_line(now: &DateTime<Local>, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!(
        "[{}] [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        args
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use chrono::TimeZone;

    #[test]
    fn test_line_format() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let line = format_line(&now, Level::Warn, "fbcheck::fbdev", &format_args!("{} bpp", 24));
        assert_eq!(line, "[2024-03-09 07:05:01.000] [WARN] [fbcheck::fbdev] 24 bpp");
    }

    #[test]
    fn test_init_appends_to_log_file() {
        let dir = std::env::temp_dir().join(format!("fbcheck-log-{}", std::process::id()));
        let path = dir.join("fbcheck.log");
        let config = SystemConfig {
            log_level: LogLevel::Debug,
            log_file: Some(path.clone()),
        };

        init(&config).unwrap();
        log::info!("logger smoke test");
        log::logger().flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("logger smoke test"));
        let _ = fs::remove_dir_all(&dir);
    }
}
