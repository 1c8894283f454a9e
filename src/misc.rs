use anyhow::Context;
use colored::*;
use log::kv::Key;
use log::{Level, LevelFilter, Metadata, Record};
use std::collections::HashSet;
use std::sync::Mutex;

pub struct Logger {
    pub level: LevelFilter,
    pub once_only_logs: Mutex<HashSet<String>>,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level, once_only_logs: Mutex::new(HashSet::new()) }
    }

    // Logs with the "once" attribute are only ever printed the first time their message is seen
    fn is_repeat(&self, record: &Record) -> bool {
        if let Some(true) = record.key_values().get(Key::from("once")).and_then(|v| v.to_bool()) {
            let mut onces = self.once_only_logs.lock().unwrap_or_else(|e| e.into_inner());
            !onces.insert(record.args().to_string())
        } else {
            false
        }
    }
}

impl log::Log for Logger {
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) || self.is_repeat(record) {
            return;
        }

        let colored_level = match record.level() {
            x @ Level::Error => x.as_str().red(),
            x @ Level::Warn => x.as_str().yellow(),
            x @ Level::Trace => x.as_str().dimmed(),
            x => x.as_str().normal(),
        };

        println!("[{}] {}", colored_level, record.args());
    }

    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn flush(&self) {}
}

// Installs Logger as the global logger. Only the first call in a process has any effect.
pub fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    log::set_boxed_logger(Box::new(Logger::new(level))).context("couldn't install logger")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn log_ragged_maze(logger: &Logger) -> bool {
        logger.is_repeat(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("ragged maze"))
                .key_values(&("once", true))
                .build(),
        )
    }

    #[test]
    fn once_logs_are_deduplicated() {
        let logger = Logger::new(LevelFilter::Warn);
        assert!(!log_ragged_maze(&logger));
        assert!(log_ragged_maze(&logger));
        assert_eq!(logger.once_only_logs.lock().unwrap().len(), 1);
    }

    #[test]
    fn second_logger_install_fails() {
        let _ = init_logger(LevelFilter::Warn);
        let err = init_logger(LevelFilter::Warn).unwrap_err();
        assert!(err.to_string().contains("couldn't install logger"));
    }

    #[test]
    fn level_filter() {
        let logger = Logger::new(LevelFilter::Info);
        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Trace).build()));
    }
}
