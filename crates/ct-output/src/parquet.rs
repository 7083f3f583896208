//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `history.parquet`
//! - `agent_snapshots.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    BooleanBuilder, Float64Builder, StringBuilder, UInt8Builder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::{OutputWriter, require_dir};
use crate::{AgentSnapshotRow, HistoryRow, OutputResult};

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",        DataType::UInt64,  false),
        Field::new("agent_id",    DataType::UInt32,  false),
        Field::new("x",           DataType::Float64, false),
        Field::new("y",           DataType::Float64, false),
        Field::new("health",      DataType::Utf8,    false),
        Field::new("quarantined", DataType::Boolean, false),
        Field::new("region",      DataType::UInt8,   false),
        Field::new("at_center",   DataType::Boolean, false),
    ]))
}

fn history_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",             DataType::UInt64,  false),
        Field::new("healthy",          DataType::UInt32,  false),
        Field::new("exposed",          DataType::UInt32,  false),
        Field::new("infected",         DataType::UInt32,  false),
        Field::new("recovered",        DataType::UInt32,  false),
        Field::new("dead",             DataType::UInt32,  false),
        Field::new("quarantined",      DataType::UInt32,  false),
        Field::new("reproduction",     DataType::Float64, false),
        Field::new("max_reproduction", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    snapshots:   Option<ArrowWriter<File>>,
    history:     Option<ArrowWriter<File>>,
    snap_schema: Arc<Schema>,
    hist_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        require_dir(dir)?;
        let snap_schema = snapshot_schema();
        let hist_schema = history_schema();

        let snap_file = File::create(dir.join("agent_snapshots.parquet"))?;
        let snapshots = ArrowWriter::try_new(snap_file, Arc::clone(&snap_schema), Some(snappy_props()))?;

        let hist_file = File::create(dir.join("history.parquet"))?;
        let history = ArrowWriter::try_new(hist_file, Arc::clone(&hist_schema), Some(snappy_props()))?;

        Ok(Self {
            snapshots: Some(snapshots),
            history: Some(history),
            snap_schema,
            hist_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut ticks       = UInt64Builder::new();
        let mut agent_ids   = UInt32Builder::new();
        let mut xs          = Float64Builder::new();
        let mut ys          = Float64Builder::new();
        let mut healths     = StringBuilder::new();
        let mut quarantined = BooleanBuilder::new();
        let mut regions     = UInt8Builder::new();
        let mut at_center   = BooleanBuilder::new();

        for row in rows {
            ticks.append_value(row.tick);
            agent_ids.append_value(row.agent_id);
            xs.append_value(row.x);
            ys.append_value(row.y);
            healths.append_value(row.health.to_string());
            quarantined.append_value(row.quarantined);
            regions.append_value(row.region);
            at_center.append_value(row.at_center);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(agent_ids.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(healths.finish()),
                Arc::new(quarantined.finish()),
                Arc::new(regions.finish()),
                Arc::new(at_center.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_history(&mut self, row: &HistoryRow) -> OutputResult<()> {
        let Some(writer) = self.history.as_mut() else {
            return Ok(());
        };

        let counts = [row.healthy, row.exposed, row.infected, row.recovered, row.dead, row.quarantined];
        let mut ticks = UInt64Builder::new();
        ticks.append_value(row.tick);
        let mut rt = Float64Builder::new();
        rt.append_value(row.reproduction);
        let mut rt_max = Float64Builder::new();
        rt_max.append_value(row.max_reproduction);

        let mut columns: Vec<arrow::array::ArrayRef> = vec![Arc::new(ticks.finish())];
        for count in counts {
            let mut b = UInt32Builder::new();
            b.append_value(count);
            columns.push(Arc::new(b.finish()));
        }
        columns.push(Arc::new(rt.finish()));
        columns.push(Arc::new(rt_max.finish()));

        let batch = RecordBatch::try_new(Arc::clone(&self.hist_schema), columns)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.snapshots.take() {
            w.close()?;
        }
        if let Some(w) = self.history.take() {
            w.close()?;
        }
        Ok(())
    }
}
