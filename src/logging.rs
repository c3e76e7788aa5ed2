//! Structured JSONL logging.
//!
//! Every entry is one JSON object per line with a timestamp, a monotonic
//! sequence number for ordering, a level, an event name, and an open fields
//! object. Entries go to stdout by default; setting `EVALBOARD_LOG_DIR`
//! redirects them to `events.jsonl` under that directory. Logging never
//! panics: a sink that cannot be opened falls back to stdout with a note on
//! stderr.

use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// =============================================================================
// Log Levels
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("debug") => Level::Debug,
            Ok("info") => Level::Info,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

// =============================================================================
// Sink selection
// =============================================================================

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);
static SINK: OnceLock<Sink> = OnceLock::new();

fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst)
}

enum Sink {
    Stdout,
    File(Mutex<BufWriter<File>>),
}

fn sink() -> &'static Sink {
    SINK.get_or_init(|| match std::env::var("EVALBOARD_LOG_DIR") {
        Ok(dir) => match open_events_file(Path::new(&dir)) {
            Ok(file) => Sink::File(Mutex::new(BufWriter::new(file))),
            Err(err) => {
                eprintln!("[log] falling back to stdout: {:#}", err);
                Sink::Stdout
            }
        },
        Err(_) => Sink::Stdout,
    })
}

/// Open (or create) the append-mode events file under `dir`.
fn open_events_file(dir: &Path) -> anyhow::Result<File> {
    create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join("events.jsonl");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open events log {}", path.display()))
}

// =============================================================================
// Core logging functions
// =============================================================================

/// RFC3339 timestamp with milliseconds.
pub fn ts_now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Render one entry as its JSONL line. Pure, so tests can pin the shape
/// without touching the process-wide sink.
pub fn render_line(ts: &str, seq: u64, level: Level, event: &str, fields: &Value) -> String {
    json!({
        "ts": ts,
        "seq": seq,
        "level": level.as_str(),
        "event": event,
        "fields": fields,
    })
    .to_string()
}

/// Emit a structured entry at the given level. Entries below the `LOG_LEVEL`
/// threshold are dropped.
pub fn log_at(level: Level, event: &str, fields: Value) {
    if level < Level::from_env() {
        return;
    }
    let line = render_line(&ts_now(), next_seq(), level, event, &fields);
    match sink() {
        Sink::Stdout => println!("{}", line),
        Sink::File(writer) => {
            if let Ok(mut w) = writer.lock() {
                let _ = writeln!(w, "{}", line);
                let _ = w.flush();
            }
        }
    }
}

/// Info-level entry, the common case.
pub fn json_log(event: &str, fields: Value) {
    log_at(Level::Info, event, fields);
}

// =============================================================================
// Tests
// =============================================================================
