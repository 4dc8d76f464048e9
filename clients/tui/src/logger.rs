use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Routes `log` records into the in-game log panel.
///
/// The terminal is in raw mode while the game runs, so nothing may
/// print to stdout. Records land in a shared buffer that the app
/// drains once per frame.
pub struct PanelLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl PanelLogger {
    /// Install as the global logger and hand back the shared buffer.
    pub fn install() -> Arc<Mutex<Vec<String>>> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let logger = PanelLogger {
            buffer: Arc::clone(&buffer),
        };
        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(LevelFilter::Info))
            .expect("Failed to initialize logger");
        buffer
    }
}

impl Log for PanelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = if record.level() == Level::Info {
            format!("{}", record.args())
        } else {
            format!("{}: {}", record.level(), record.args())
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
            // Keep only the last 100 records
            if buffer.len() > 100 {
                buffer.remove(0);
            }
        }
    }

    fn flush(&self) {}
}
