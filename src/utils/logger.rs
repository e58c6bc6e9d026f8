//! File-backed `log` sink for the terminal binary.
//!
//! The terminal is owned by the UI while the game runs, so log lines go to
//! ~/.icefish/icefish.log instead of stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level (`error` .. `trace`, `off`).
pub const LOG_LEVEL_ENV: &str = "ICEFISH_LOG";

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name; unknown or missing names fall back to `Info`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger at `path`, level taken from `ICEFISH_LOG`.
pub fn init(path: &Path) -> io::Result<()> {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::scratch_path;
    use std::fs;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_writes_enabled_records_only() {
        let path = scratch_path("logger_test.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();
        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("icefish")
                .args(format_args!("session started"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("icefish")
                .args(format_args!("noisy detail"))
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO  icefish: session started"));
        assert!(!contents.contains("noisy detail"));
        fs::remove_file(path).ok();
    }
}
