//! Append-only transcript storage.
//!
//! A finished session is written as one framed block:
//!
//! ```text
//!
//! ========================================
//! RUN START : 2026-10-16
//! ========================================
//! Reggy++: Hi! I'm Reggy++. What's your name?
//! You: Alice Smith
//! ...
//! ========================================
//! RUN END
//! ========================================
//! ```
//!
//! The leading blank line separates consecutive runs in the same file.

use crate::constants::TRANSCRIPT_DELIMITER_WIDTH;
use crate::types::TurnRecord;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for a finished session's transcript.
///
/// `flush` is called exactly once per session, after the last line has been
/// recorded.
pub trait TranscriptSink {
    /// Persist the whole record of one session.
    fn flush(&mut self, record: &TurnRecord, run_date: NaiveDate) -> Result<()>;
}

impl<T: TranscriptSink + ?Sized> TranscriptSink for Box<T> {
    fn flush(&mut self, record: &TurnRecord, run_date: NaiveDate) -> Result<()> {
        (**self).flush(record, run_date)
    }
}

/// Render the framed block for one session.
pub fn render_transcript(record: &TurnRecord, run_date: NaiveDate) -> String {
    let bar = "=".repeat(TRANSCRIPT_DELIMITER_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&bar);
    out.push('\n');
    out.push_str(&format!("RUN START : {}\n", run_date.format("%Y-%m-%d")));
    out.push_str(&bar);
    out.push('\n');
    for line in record.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&bar);
    out.push_str("\nRUN END\n");
    out.push_str(&bar);
    out.push('\n');
    out
}

/// Appends transcripts to a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileTranscript {
    path: PathBuf,
}

impl FileTranscript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TranscriptSink for FileTranscript {
    fn flush(&mut self, record: &TurnRecord, run_date: NaiveDate) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::transcript(format!("create {} failed: {}", parent.display(), e))
            })?;
        }

        let block = render_transcript(record, run_date);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::transcript(format!("open {} failed: {}", self.path.display(), e)))?;
        file.write_all(block.as_bytes())
            .map_err(|e| Error::transcript(format!("write {} failed: {}", self.path.display(), e)))?;

        tracing::info!(
            path = %self.path.display(),
            lines = record.len(),
            "transcript appended"
        );
        Ok(())
    }
}

/// Keeps rendered blocks in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTranscript {
    blocks: Vec<String>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered blocks, one per flushed session.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }
}

impl TranscriptSink for MemoryTranscript {
    fn flush(&mut self, record: &TurnRecord, run_date: NaiveDate) -> Result<()> {
        self.blocks.push(render_transcript(record, run_date));
        Ok(())
    }
}

/// Drops transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardTranscript;

impl TranscriptSink for DiscardTranscript {
    fn flush(&mut self, record: &TurnRecord, _run_date: NaiveDate) -> Result<()> {
        tracing::debug!(lines = record.len(), "transcript discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> TurnRecord {
        let mut record = TurnRecord::new();
        record.push("Reggy++: Hi! I'm Reggy++. What's your name?");
        record.push("You: bye");
        record.push("Reggy++: Goodbye!");
        record
    }

    #[test]
    fn render_frames_lines_with_delimiters() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        let block = render_transcript(&sample_record(), date);
        let bar = "=".repeat(40);
        let expected = format!(
            "\n{bar}\nRUN START : 2026-10-16\n{bar}\n\
             Reggy++: Hi! I'm Reggy++. What's your name?\n\
             You: bye\n\
             Reggy++: Goodbye!\n\
             {bar}\nRUN END\n{bar}\n"
        );
        assert_eq!(block, expected);
    }

    #[test]
    fn memory_sink_keeps_each_flush() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
        let mut sink = MemoryTranscript::new();
        sink.flush(&sample_record(), date).expect("first flush");
        sink.flush(&TurnRecord::new(), date).expect("second flush");
        assert_eq!(sink.blocks().len(), 2);
        assert!(sink.blocks()[0].contains("You: bye"));
        assert!(sink.blocks()[1].contains("RUN START : 2026-01-02"));
    }

    #[test]
    fn boxed_sink_forwards_flush() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
        let mut sink: Box<dyn TranscriptSink> = Box::new(DiscardTranscript);
        sink.flush(&sample_record(), date).expect("discard never fails");
    }
}
