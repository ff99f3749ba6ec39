use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub struct SpinnerLogger;
pub static SPINNER_LOGGER: SpinnerLogger = SpinnerLogger;

/// Install [`SPINNER_LOGGER`] as the global logger.
///
/// Fails if a logger is already installed; the max level is updated either way.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&SPINNER_LOGGER)
}

/// One log line: `[timestamp] LEVEL target - message`.
pub fn format_line(now: DateTime<Utc>, record: &Record) -> String {
    format!(
        "[{}] {} {} - {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

impl log::Log for SpinnerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_line(record.level(), &format_line(Utc::now(), record));
        }
    }

    fn flush(&self) {}
}

#[cfg(target_family = "wasm")]
fn write_line(level: Level, line: &str) {
    use web_sys::console;
    match level {
        Level::Error => console::error_1(&line.into()),
        Level::Warn => console::warn_1(&line.into()),
        Level::Info => console::info_1(&line.into()),
        Level::Debug | Level::Trace => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_family = "wasm"))]
fn write_line(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log::Log;

    #[test]
    fn test_format_line() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        let line = format_line(
            now,
            &Record::builder()
                .args(format_args!("overlay #admin-spinner appended"))
                .level(Level::Debug)
                .target("spinner_core::controller")
                .build(),
        );
        assert_eq!(
            line,
            "[2024-03-01T12:30:05.000Z] DEBUG spinner_core::controller - overlay #admin-spinner appended"
        );
    }

    #[test]
    fn test_enabled_follows_max_level() {
        log::set_max_level(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(SPINNER_LOGGER.enabled(&warn));
        assert!(!SPINNER_LOGGER.enabled(&info));
    }
}
