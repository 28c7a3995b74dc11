use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

static LONGHAND_DROP_WARNED: AtomicBool = AtomicBool::new(false);

#[derive(Clone)]
pub(crate) struct DebugLogger {
    inner: Arc<Mutex<DebugState>>,
}

struct DebugState {
    writer: BufWriter<File>,
    counters: HashMap<String, u64>,
}

impl DebugLogger {
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(DebugState {
                writer: BufWriter::new(file),
                counters: HashMap::new(),
            })),
        })
    }

    pub fn log_json(&self, json: &str) {
        if let Ok(mut state) = self.inner.lock() {
            let _ = writeln!(state.writer, "{json}");
        }
    }

    pub fn increment(&self, key: &str, amount: u64) {
        if let Ok(mut state) = self.inner.lock() {
            let entry = state.counters.entry(key.to_string()).or_insert(0);
            *entry = entry.saturating_add(amount);
        }
    }

    pub fn emit_summary(&self, context: &str) {
        let Ok(mut state) = self.inner.lock() else {
            return;
        };
        let mut counters: Vec<(String, u64)> = state.counters.drain().collect();
        counters.sort();
        let counts = counters
            .iter()
            .map(|(key, value)| format!("{}:{value}", json_string(key)))
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(
            state.writer,
            "{{\"type\":\"debug.summary\",\"context\":{},\"counts\":{{{counts}}}}}",
            json_string(context)
        );
    }

    pub fn flush(&self) {
        if let Ok(mut state) = self.inner.lock() {
            let _ = state.writer.flush();
        }
    }
}

// Returns `true` when this call emitted the message.
pub(crate) fn warn_longhand_dropped_once(property: &str, reason: &str) -> bool {
    if LONGHAND_DROP_WARNED.swap(true, Ordering::AcqRel) {
        return false;
    }
    eprintln!(
        "[css_longhand] dropped longhand \"{}\": {} (further drops are not reported)",
        property, reason
    );
    true
}

#[cfg(test)]
pub(crate) fn longhand_drop_warned() -> bool {
    LONGHAND_DROP_WARNED.load(Ordering::Acquire)
}

fn json_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn json_string(value: &str) -> String {
    format!("\"{}\"", json_escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn json_escape_handles_quotes_and_controls() {
        assert_eq!(json_escape("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
        assert_eq!(json_string("x"), "\"x\"");
    }

    #[test]
    fn summary_lists_counters_sorted() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let path = std::env::temp_dir().join(format!(
            "css_longhand_debug_summary_{}_{}.jsonl",
            std::process::id(),
            nanos
        ));
        let logger = DebugLogger::new(&path).expect("debug logger");
        logger.increment("b.count", 2);
        logger.increment("a.count", 1);
        logger.increment("b.count", 3);
        logger.emit_summary("test");
        logger.emit_summary("drained");
        logger.flush();
        let log = std::fs::read_to_string(&path).expect("read debug log");
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(
            lines,
            vec![
                "{\"type\":\"debug.summary\",\"context\":\"test\",\"counts\":{\"a.count\":1,\"b.count\":5}}",
                "{\"type\":\"debug.summary\",\"context\":\"drained\",\"counts\":{}}",
            ]
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn longhand_drop_warning_fires_once() {
        warn_longhand_dropped_once("margin-top", "first");
        assert!(longhand_drop_warned());
        assert!(!warn_longhand_dropped_once("margin-top", "second"));
    }
}
