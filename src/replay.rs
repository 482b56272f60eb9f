//! Recorded pointer-sample traces.
//!
//! A trace is a CSV file with a header row and columns
//! `phase,x,y,dt_ms`: the sample itself plus the delay since the previous
//! row, used for optional real-time pacing. The `dt_ms` column may be
//! omitted entirely.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::tracker::{DragPhase, PointerSample};

/// One row of a recorded trace.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TraceRecord {
    pub phase: DragPhase,
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the previous sample.
    #[serde(default)]
    pub dt_ms: u64,
}

impl TraceRecord {
    pub fn sample(&self) -> PointerSample {
        PointerSample::new(self.phase, self.x, self.y)
    }
}

/// Read a trace from any reader.
pub fn read_trace(reader: impl Read) -> Result<Vec<TraceRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize().enumerate() {
        // Header is row 0, so the first data row is line 2.
        let record: TraceRecord =
            row.with_context(|| format!("Malformed trace row at line {}", i + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Read a whole trace file into memory.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open trace file: {}", path.display()))?;
    read_trace(file).with_context(|| format!("Invalid trace file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_trace() {
        let csv = "phase,x,y,dt_ms\ndown,10.0,20.0,0\nmove,30.5,20.0,16\nup,30.5,20.0,16\n";
        let records = read_trace(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].phase, DragPhase::Down);
        assert_eq!(records[1].x, 30.5);
        assert_eq!(records[1].dt_ms, 16);
        assert_eq!(records[2].phase, DragPhase::Up);
    }

    #[test]
    fn test_read_trace_without_dt_column() {
        let csv = "phase,x,y\nmove,1.0,2.0\ncancel,1.0,2.0\n";
        let records = read_trace(csv.as_bytes()).unwrap();

        assert_eq!(records[0].dt_ms, 0);
        assert_eq!(records[1].phase, DragPhase::Cancel);
    }

    #[test]
    fn test_read_trace_rejects_unknown_phase() {
        let csv = "phase,x,y\nhover,1.0,2.0\n";
        assert!(read_trace(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_read_trace_rejects_non_numeric_position() {
        let csv = "phase,x,y\nmove,abc,2.0\n";
        assert!(read_trace(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_record_to_sample() {
        let record = TraceRecord {
            phase: DragPhase::Move,
            x: 5.0,
            y: -3.0,
            dt_ms: 8,
        };
        let sample = record.sample();

        assert_eq!(sample.phase, DragPhase::Move);
        assert_eq!(sample.position().x, 5.0);
        assert_eq!(sample.position().y, -3.0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_trace("/nonexistent/trace.csv").is_err());
    }
}
