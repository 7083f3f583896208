//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `history` and `agent_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::{OutputWriter, require_dir};
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        require_dir(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS history (
                 tick             INTEGER NOT NULL,
                 healthy          INTEGER NOT NULL,
                 exposed          INTEGER NOT NULL,
                 infected         INTEGER NOT NULL,
                 recovered        INTEGER NOT NULL,
                 dead             INTEGER NOT NULL,
                 quarantined      INTEGER NOT NULL,
                 reproduction     REAL    NOT NULL,
                 max_reproduction REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 tick        INTEGER NOT NULL,
                 agent_id    INTEGER NOT NULL,
                 x           REAL    NOT NULL,
                 y           REAL    NOT NULL,
                 health      TEXT    NOT NULL,
                 quarantined INTEGER NOT NULL,
                 region      INTEGER NOT NULL,
                 at_center   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (tick, agent_id, x, y, health, quarantined, region, at_center) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.agent_id,
                    row.x,
                    row.y,
                    row.health.to_string(),
                    row.quarantined as i64,
                    row.region,
                    row.at_center as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO history \
             (tick, healthy, exposed, infected, recovered, dead, quarantined, reproduction, max_reproduction) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.tick as i64,
                row.healthy,
                row.exposed,
                row.infected,
                row.recovered,
                row.dead,
                row.quarantined,
                row.reproduction,
                row.max_reproduction,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
