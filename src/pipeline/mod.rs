use std::path::PathBuf;

pub mod stage1_extract;
pub mod stage2_scaling;

use crate::input::{ReportError, read_report};
use crate::model::{ReportRecord, ScalingMode};
use crate::report::table::render_table;
use stage1_extract::build_record;
use stage2_scaling::{ScalingError, compute_scaling, sort_by_ranks};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub reports: Vec<PathBuf>,
    pub scaling: ScalingMode,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Scaling(#[from] ScalingError),
}

/// Reads every report, then returns the records sorted and scaled.
/// The first failing report aborts the whole run.
pub fn collect_records(config: &RunConfig) -> Result<Vec<ReportRecord>, RunError> {
    let mut records = Vec::with_capacity(config.reports.len());
    for path in &config.reports {
        let report = read_report(path)?;
        records.push(build_record(&report)?);
    }

    sort_by_ranks(&mut records);
    compute_scaling(&mut records, config.scaling)?;
    Ok(records)
}

pub fn run_pipeline(config: &RunConfig) -> Result<String, RunError> {
    let records = collect_records(config)?;
    tracing::info!("Performing {} scaling", config.scaling);
    Ok(render_table(&records))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
