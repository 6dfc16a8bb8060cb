use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;

/// Complete record of one finished hand, serialized as a single JSON line
/// for hand-history storage and later aggregation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Hand number within the session, from 1.
    pub hand_no: u32,
    /// Chronological action history of the hand's betting rounds.
    pub actions: Vec<String>,
    /// Revealed community cards.
    pub board: Vec<Card>,
    /// Chips paid out at showdown (zero when the pot was carried).
    pub pot_awarded: u32,
    /// Winner names; empty when every seat folded.
    pub winners: Vec<String>,
    /// (name, score) per non-folded seat.
    pub scores: Vec<(String, u32)>,
    /// True when every seat folded and the pot rolled into the next hand.
    #[serde(default)]
    pub carried: bool,
    /// Timestamp when the hand finished (RFC3339), injected on write.
    #[serde(default)]
    pub ts: Option<String>,
}

/// Buffered JSONL writer for hand records.
pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
