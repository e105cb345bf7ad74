//! Logging setup.
//!
//! Everything logs through the `log` facade. On wasm the records go to the
//! browser console; other targets leave logger installation to the embedder.

/// Logger configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Info,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use console::init_logging;

#[cfg(target_arch = "wasm32")]
mod console {
    use std::sync::Once;

    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    use super::LoggingConfig;

    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;
    static INIT: Once = Once::new();

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => console::error_1(&line),
                Level::Warn => console::warn_1(&line),
                Level::Info => console::info_1(&line),
                Level::Debug | Level::Trace => console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Installs the console logger once; later calls are ignored.
    pub fn init_logging(config: LoggingConfig) {
        INIT.call_once(|| {
            // Another logger may already be installed by the embedding page.
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(config.level);
            }
            log::debug!("logging initialized");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(LoggingConfig::default().level, log::LevelFilter::Info);
    }
}
