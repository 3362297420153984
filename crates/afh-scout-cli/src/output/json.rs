use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print JSON to stdout.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = serde_json::to_writer_pretty(&mut lock, value) {
        eprintln!("JSON serialization error: {}", e);
        return;
    }
    let _ = writeln!(lock);
}
