#![warn(missing_docs)]
//! In-memory collaborators and recording surfaces for headless menu tests.

mod memory;
mod summary;

use anyhow::Result;
use perkit_menu::BroadcastEvent;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use memory::*;
pub use summary::*;

/// One broadcast as written to the journal.
#[derive(Debug, Serialize)]
pub struct BroadcastRecord<'a> {
    /// RFC 3339 wall-clock time of the broadcast.
    pub timestamp: String,
    /// The event itself.
    #[serde(flatten)]
    pub event: &'a BroadcastEvent,
}

impl<'a> BroadcastRecord<'a> {
    /// Stamp `event` with the current time.
    pub fn now(event: &'a BroadcastEvent) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event,
        }
    }
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent directories if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append a record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn journal_writes_one_line_per_event() {
        let path = std::env::temp_dir().join(format!(
            "perkit-journal-{}.jsonl",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let opened = BroadcastEvent::OpenedKitRoom {
            viewer: "Steve".into(),
        };
        let repaired = BroadcastEvent::RepairedItems {
            viewer: "Alex".into(),
        };

        let mut sink = JsonlSink::create(&path).expect("sink create");
        sink.write(&BroadcastRecord::now(&opened)).expect("write");
        sink.write(&BroadcastRecord::now(&repaired)).expect("write");

        let contents = fs::read_to_string(&path).expect("file readable");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""event":"opened_kit_room""#));
        assert!(lines[0].contains(r#""timestamp":"#));
        assert!(lines[1].contains(r#""viewer":"Alex""#));
    }
}
