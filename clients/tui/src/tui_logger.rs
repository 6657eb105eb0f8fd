use log::{Level, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

const MAX_BUFFERED: usize = 100;

/// Routes `log::` messages into a shared buffer the UI drains into its
/// log pane, instead of writing over the alternate screen.
pub struct TuiLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl TuiLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                buffer: buffer.clone(),
            },
            buffer,
        )
    }
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = match record.level() {
            Level::Error => format!("ERROR: {}", record.args()),
            Level::Warn => format!("WARN: {}", record.args()),
            _ => format!("{}", record.args()),
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(msg);
            if buffer.len() > MAX_BUFFERED {
                buffer.remove(0);
            }
        }
    }

    fn flush(&self) {}
}
