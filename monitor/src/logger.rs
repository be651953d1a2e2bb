use chrono::Local;
use log::{Log, Metadata, Record};

/// Writes log records to stderr so they never interleave with the reports
/// on stdout. Diagnostics stay plain text; there is no log file.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("iss") || metadata.target().starts_with("open_notify")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
