//! Feeds advance-call snapshots into an export backend.

use ct_core::SimConfig;
use ct_sim::{SimObserver, Snapshot};

use crate::row::{AgentSnapshotRow, HistoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Writes a history row for every snapshot and the full agent table on every
/// `snapshot_interval`-th one.
///
/// Observer hooks cannot fail, so the first writer error is latched and the
/// rest are dropped; poll it with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    /// `0` disables agent snapshots.
    snapshot_interval: u64,
    advances:          u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, snapshot_interval: u64) -> Self {
        Self { writer, snapshot_interval, advances: 0, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let result = self.writer.write_history(&HistoryRow::new(snapshot));
        self.store_err(result);

        self.advances += 1;
        if self.snapshot_interval > 0 && self.advances.is_multiple_of(self.snapshot_interval) {
            let rows = AgentSnapshotRow::all(snapshot);
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    /// A restarted run starts a fresh snapshot cadence.
    fn on_restart(&mut self, _config: &SimConfig) {
        self.advances = 0;
    }
}
