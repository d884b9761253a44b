use std::collections::BTreeSet;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use eox_cli::pipeline::{self, IngestResult, LookupResult};
use eox_cli::summary::apply_table_style;
use eox_cli::types::ReportResult;
use eox_client::{AuthClient, EoxClient};
use eox_model::DATE_COLUMNS;
use eox_output::output_path;

use crate::cli::ReportArgs;

/// Lists the date columns the report appends and the API fields they mirror.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "API Field"]);
    apply_table_style(&mut table);
    for column in &DATE_COLUMNS {
        table.add_row(vec![column.header, column.field]);
    }
    println!("{table}");
    Ok(())
}

/// Runs the full report pipeline for one input file.
pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let report_span = info_span!("report", input = %args.input.display());
    let _report_guard = report_span.enter();

    // Ingest first: input problems must surface before any network call.
    let ingest_span = info_span!("ingest");
    let IngestResult {
        table,
        serial_idx,
        serials,
    } = ingest_span.in_scope(|| pipeline::ingest(&args.input, &args.serial_column))?;

    // One token per run, reused read-only for every batch.
    let auth_span = info_span!("auth");
    let token = auth_span.in_scope(|| -> Result<String> {
        let auth = AuthClient::new(args.client_id.as_str(), args.client_secret.as_str())
            .context("build auth client")?;
        auth.request_token().context("request access token")
    })?;
    info!("obtained access token for the EoX API");

    let client = EoxClient::new().context("build lookup client")?;
    let lookup_span = info_span!("lookup");
    let LookupResult { records, chunks } = lookup_span.in_scope(|| {
        pipeline::collect_lifecycle_data(&serials, |batch| {
            client.lookup_by_serials(&token, batch)
        })
    })?;

    let join_span = info_span!("join");
    let joined = join_span.in_scope(|| pipeline::join(&table, serial_idx, &records));

    let output = output_path(&args.input, args.output.as_deref());
    let output_span = info_span!("output");
    output_span.in_scope(|| pipeline::write_report(&output, &joined))?;

    let matched_serials = records
        .iter()
        .map(|record| record.serial.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    Ok(ReportResult {
        output_path: output,
        input_rows: table.rows.len(),
        serial_count: serials.len(),
        chunks,
        record_count: records.len(),
        matched_serials,
    })
}
