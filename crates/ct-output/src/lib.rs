//! `ct-output`: exports the epidemic curve and agent tables of a run.
//!
//! | Feature   | Writer          | Files in the target directory                |
//! |-----------|-----------------|----------------------------------------------|
//! | *(none)*  | `CsvWriter`     | `history.csv`, `agent_snapshots.csv`         |
//! | `sqlite`  | `SqliteWriter`  | `output.db` (`history`, `agent_snapshots`)   |
//! | `parquet` | `ParquetWriter` | `history.parquet`, `agent_snapshots.parquet` |
//!
//! Every writer implements [`OutputWriter`]; [`SimOutputObserver`] plugs one
//! into `Sim::advance_observed`:
//!
//! ```rust,ignore
//! let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?, 50);
//! while sim.tick() < Tick(5_000) {
//!     sim.advance_observed(speed, &mut obs)?;
//! }
//! obs.finish()?;
//! if let Some(e) = obs.take_error() {
//!     log::warn!("export failed: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, HistoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
