//! The sink every export backend implements.

use std::path::Path;

use crate::{AgentSnapshotRow, HistoryRow, OutputError, OutputResult};

/// One export backend.  [`SimOutputObserver`][crate::SimOutputObserver]
/// feeds it rows; history rows arrive once per advance call, agent rows in
/// batches of one whole population.
pub trait OutputWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()>;

    /// Flush everything to disk.  Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Rejects a target directory that is not there yet.
pub(crate) fn require_dir(dir: &Path) -> OutputResult<()> {
    if dir.is_dir() { Ok(()) } else { Err(OutputError::MissingDir(dir.to_path_buf())) }
}
