//! Report pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the input table and resolve the serial column
//! 2. **Lookup**: Batch serials against the EoX API, normalize each answer
//! 3. **Join**: Left join the accumulated records onto the input table
//! 4. **Output**: Write the report file
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Stages 1, 3 and 4 are fatal on error; inside stage 2 a failed
//! batch is recovered as "no records" so one bad batch cannot abort the
//! whole report.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use eox_client::MAX_SERIALS_PER_REQUEST;
use eox_ingest::{CsvTable, read_csv_table, serial_column_index, serial_values};
use eox_model::{EoxRecord, LifecycleDates};
use eox_transform::{chunk_count, chunks, left_join_dates, normalize_records};

use crate::types::ChunkSummary;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// The input table, cells normalized.
    pub table: CsvTable,
    /// Index of the serial-number column.
    pub serial_idx: usize,
    /// Ordered serial values, one per data row.
    pub serials: Vec<String>,
}

/// Reads the input table and resolves the serial column.
///
/// Every failure here happens before the first network call, so a bad
/// input never costs API quota.
pub fn ingest(input: &Path, serial_column: &str) -> Result<IngestResult> {
    let start = Instant::now();
    let table = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
    let serial_idx = serial_column_index(&table, serial_column)
        .with_context(|| format!("resolve serial column in {}", input.display()))?;
    let serials = serial_values(&table, serial_idx);
    info!(
        rows = table.rows.len(),
        serials = serials.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        table,
        serial_idx,
        serials,
    })
}

/// Result of the lookup stage.
#[derive(Debug)]
pub struct LookupResult {
    /// Normalized lifecycle records, in batch order.
    pub records: Vec<LifecycleDates>,
    /// Per-batch outcomes, in call order.
    pub chunks: Vec<ChunkSummary>,
}

/// Runs every batch of serials through `lookup` and accumulates the
/// normalized records.
///
/// Batches are processed strictly in order, [`MAX_SERIALS_PER_REQUEST`]
/// serials at a time. A batch whose lookup fails is logged together with
/// the serials it covered and recovered as zero records; those serials
/// simply end up with empty date columns. A date value the normalizer
/// cannot parse aborts the run.
pub fn collect_lifecycle_data<F>(serials: &[String], mut lookup: F) -> Result<LookupResult>
where
    F: FnMut(&[String]) -> eox_client::Result<Vec<EoxRecord>>,
{
    let start = Instant::now();
    let total = chunk_count(serials.len(), MAX_SERIALS_PER_REQUEST);
    info!(
        serials = serials.len(),
        chunks = total,
        "divided serial list into batches"
    );

    let mut records = Vec::new();
    let mut summaries = Vec::with_capacity(total);
    for (index, batch) in chunks(serials, MAX_SERIALS_PER_REQUEST).enumerate() {
        let index = index + 1;
        info!(
            chunk = index,
            of = total,
            serials = batch.len(),
            "processing serials"
        );
        match lookup(batch) {
            Ok(raw) => {
                let normalized = normalize_records(&raw).context("normalize lookup records")?;
                debug!(chunk = index, records = normalized.len(), "batch normalized");
                summaries.push(ChunkSummary {
                    index,
                    serials: batch.len(),
                    records: normalized.len(),
                    dropped: false,
                });
                records.extend(normalized);
            }
            Err(error) => {
                warn!(
                    chunk = index,
                    serials = ?batch,
                    %error,
                    "lookup batch failed; continuing without its records"
                );
                summaries.push(ChunkSummary {
                    index,
                    serials: batch.len(),
                    records: 0,
                    dropped: true,
                });
            }
        }
    }

    info!(
        records = records.len(),
        dropped = summaries.iter().filter(|chunk| chunk.dropped).count(),
        duration_ms = start.elapsed().as_millis(),
        "lookup complete"
    );
    Ok(LookupResult { records, chunks: summaries })
}

/// Joins the accumulated records onto the input table.
pub fn join(table: &CsvTable, serial_idx: usize, records: &[LifecycleDates]) -> CsvTable {
    let start = Instant::now();
    let joined = left_join_dates(table, serial_idx, records);
    info!(
        rows = joined.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "join complete"
    );
    joined
}

/// Writes the joined table to `output`.
pub fn write_report(output: &Path, table: &CsvTable) -> Result<()> {
    let start = Instant::now();
    eox_output::write_csv_table(output, table)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        path = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "report written"
    );
    Ok(())
}
