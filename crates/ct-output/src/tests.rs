//! Tests for ct-output.

use tempfile::TempDir;

use ct_agent::HealthStatus;

use crate::row::{AgentSnapshotRow, HistoryRow};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
    AgentSnapshotRow {
        tick,
        agent_id,
        x:           10.0 + agent_id as f64,
        y:           20.5,
        health:      HealthStatus::Infected,
        quarantined: agent_id % 2 == 1,
        region:      (agent_id % 8) as u8,
        at_center:   false,
    }
}

fn history_row(tick: u64) -> HistoryRow {
    HistoryRow {
        tick,
        healthy:          90,
        exposed:          4,
        infected:         3,
        recovered:        2,
        dead:             1,
        quarantined:      2,
        reproduction:     1.25,
        max_reproduction: 2.5,
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::OutputError;
    use crate::csv::{CsvWriter, HISTORY_HEADER, SNAPSHOT_HEADER};
    use crate::writer::OutputWriter;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("history.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_rejects_missing_dir() {
        let dir = tmp();
        let missing = dir.path().join("not-there");
        match CsvWriter::new(&missing) {
            Err(OutputError::MissingDir(p)) => assert_eq!(p, missing),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("writer created in a missing directory"),
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HISTORY_HEADER);

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "5");        // tick
        assert_eq!(&rows[1][1], "1");        // agent_id
        assert_eq!(&rows[1][2], "11.000");   // x
        assert_eq!(&rows[1][4], "infected"); // health
        assert_eq!(&rows[1][5], "1");        // quarantined
    }

    #[test]
    fn csv_history_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&history_row(30)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "30");
        assert_eq!(&rows[0][1], "90");
        assert_eq!(&rows[0][6], "2");
        assert_eq!(&rows[0][7], "1.2500");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{CsvWriter, SimOutputObserver};
    use ct_core::SimConfig;
    use ct_sim::SimBuilder;

    fn config() -> SimConfig {
        SimConfig { population: 24, initial_infected: 2, seed: 1, ..SimConfig::default() }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 2);
        for _ in 0..6 {
            sim.advance_observed(5, &mut obs).unwrap();
        }
        obs.finish().unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("history.csv")).unwrap();
        let history: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(history.len(), 6);
        assert_eq!(&history[5][0], "30");

        // interval 2 → agent rows after advances 2, 4, 6.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3 * 24);
        assert_eq!(&rows[0][0], "10");
    }

    #[test]
    fn zero_interval_writes_no_agent_rows() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), 0);
        for _ in 0..4 {
            sim.advance_observed(1, &mut obs).unwrap();
        }
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn restart_resets_snapshot_cadence() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), 2);
        sim.advance_observed(1, &mut obs).unwrap();
        sim.restart_observed(config(), &mut obs).unwrap();
        sim.advance_observed(1, &mut obs).unwrap();
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0, "second advance after restart is the first of its run");
    }

    #[test]
    fn rows_mirror_the_snapshot() {
        let mut sim = SimBuilder::new(config()).build().unwrap();
        let snapshot = sim.advance(3).unwrap();
        let rows = AgentSnapshotRow::all(&snapshot);
        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|r| r.tick == 3));
        assert_eq!(rows[7].x, snapshot.agents[7].position.x);

        let h = HistoryRow::new(&snapshot);
        assert_eq!(h.tick, 3);
        assert_eq!(h.infected, snapshot.counts.infected);
        assert_eq!(h.max_reproduction, snapshot.max_reproduction);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_health_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (health, quarantined): (String, i64) = conn
            .query_row(
                "SELECT health, quarantined FROM agent_snapshots WHERE agent_id = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(health, "infected");
        assert_eq!(quarantined, 1);
    }

    #[test]
    fn sqlite_history_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_history(&history_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, healthy, rt): (i64, i64, f64) = conn
            .query_row(
                "SELECT tick, healthy, reproduction FROM history WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(tick, 7);
        assert_eq!(healthy, 90);
        assert!((rt - 1.25).abs() < 1e-12);
    }
}

// ── Parquet ───────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use super::*;
    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("agent_snapshots.parquet").exists());
        assert!(dir.path().join("history.parquet").exists());
    }

    #[test]
    fn parquet_snapshot_rows_and_schema() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 2), snap_row(1, 2)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("agent_snapshots.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let total_rows: usize = builder.build().unwrap().map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2);

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, ["tick", "agent_id", "x", "y", "health", "quarantined", "region", "at_center"]);
        assert_eq!(*schema.field_with_name("health").unwrap().data_type(), DataType::Utf8);
    }

    #[test]
    fn parquet_history_rows() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_history(&history_row(1)).unwrap();
        w.write_history(&history_row(2)).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("history.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let total_rows: usize = builder.build().unwrap().map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2);
    }
}
