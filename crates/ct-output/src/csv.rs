//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `history.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::{OutputWriter, require_dir};
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

pub const HISTORY_HEADER: [&str; 9] = [
    "tick",
    "healthy",
    "exposed",
    "infected",
    "recovered",
    "dead",
    "quarantined",
    "reproduction",
    "max_reproduction",
];

pub const SNAPSHOT_HEADER: [&str; 8] =
    ["tick", "agent_id", "x", "y", "health", "quarantined", "region", "at_center"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        require_dir(dir)?;
        let mut history = Writer::from_path(dir.join("history.csv"))?;
        history.write_record(HISTORY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { history, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.health.to_string(),
                (row.quarantined as u8).to_string(),
                row.region.to_string(),
                (row.at_center as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.tick.to_string(),
            row.healthy.to_string(),
            row.exposed.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.dead.to_string(),
            row.quarantined.to_string(),
            format!("{:.4}", row.reproduction),
            format!("{:.4}", row.max_reproduction),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
