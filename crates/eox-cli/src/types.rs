use std::path::PathBuf;

/// Outcome of one lookup batch.
#[derive(Debug, Clone)]
pub struct ChunkSummary {
    /// 1-based batch index.
    pub index: usize,
    /// Serials submitted in this batch.
    pub serials: usize,
    /// Normalized records produced from this batch.
    pub records: usize,
    /// True when the batch's lookup failed and was recovered as "no data".
    pub dropped: bool,
}

/// Result of a completed report run.
#[derive(Debug)]
pub struct ReportResult {
    /// Where the report was written.
    pub output_path: PathBuf,
    /// Data rows in the input table.
    pub input_rows: usize,
    /// Serial values submitted to the lookup stage.
    pub serial_count: usize,
    /// Per-batch outcomes, in call order.
    pub chunks: Vec<ChunkSummary>,
    /// Normalized lifecycle records accumulated across all batches.
    pub record_count: usize,
    /// Distinct serials that came back with lifecycle data.
    pub matched_serials: usize,
}

impl ReportResult {
    /// Number of batches that failed and were recovered as "no data".
    pub fn dropped_chunks(&self) -> usize {
        self.chunks.iter().filter(|chunk| chunk.dropped).count()
    }
}
