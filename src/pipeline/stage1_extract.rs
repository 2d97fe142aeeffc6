use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::input::extract::{LabelScanner, extract_value};
use crate::input::{ReportError, ReportText};
use crate::model::{Efficiencies, RawMetrics, ReportRecord};

pub const LABEL_RANKS: &str = "Number of MPI processes";
pub const LABEL_NODES: &str = "Number of nodes";
pub const LABEL_ELAPSED: &str = "Elapsed Time (ns)";
pub const LABEL_USEFUL: &str = "Useful Time (ns)";
pub const LABEL_MPI: &str = "MPI Time (ns)";
pub const LABEL_PARALLEL_EFF: &str = "MPI Parallel efficiency";
pub const LABEL_LOAD_BALANCE: &str = "MPI Load Balance";
pub const LABEL_COMM_EFF: &str = "MPI Communication efficiency";

pub const REQUIRED_LABELS: [&str; 8] = [
    LABEL_RANKS,
    LABEL_NODES,
    LABEL_ELAPSED,
    LABEL_USEFUL,
    LABEL_MPI,
    LABEL_PARALLEL_EFF,
    LABEL_LOAD_BALANCE,
    LABEL_COMM_EFF,
];

const NS_PER_SEC: f64 = 1e9;

/// Compiled once and shared by every report of the run.
static SCANNERS: LazyLock<HashMap<&'static str, LabelScanner>> = LazyLock::new(|| {
    REQUIRED_LABELS
        .iter()
        .map(|&label| (label, LabelScanner::new(label)))
        .collect()
});

pub fn build_record(report: &ReportText) -> Result<ReportRecord, ReportError> {
    let raw = get_raw_metrics(report)?;
    let efficiencies = get_efficiencies(report)?;

    tracing::debug!(
        path = %report.path.display(),
        ranks = raw.ranks,
        nodes = raw.nodes,
        t_elapsed = raw.t_elapsed,
        t_mpi = raw.t_mpi,
        t_avg_useful = raw.t_avg_useful,
        "built report record"
    );

    Ok(ReportRecord {
        source: report.path.clone(),
        raw,
        efficiencies,
        scaling: None,
    })
}

pub fn get_raw_metrics(report: &ReportText) -> Result<RawMetrics, ReportError> {
    let ranks = count_value(report, LABEL_RANKS)?;
    let nodes = count_value(report, LABEL_NODES)?;
    let t_elapsed = float_value(report, LABEL_ELAPSED)? / NS_PER_SEC;
    let t_useful = float_value(report, LABEL_USEFUL)? / NS_PER_SEC;
    let t_mpi = float_value(report, LABEL_MPI)? / NS_PER_SEC;

    Ok(RawMetrics {
        ranks,
        nodes,
        t_elapsed,
        t_useful,
        t_mpi,
        t_avg_useful: t_useful / f64::from(ranks),
    })
}

pub fn get_efficiencies(report: &ReportText) -> Result<Efficiencies, ReportError> {
    Ok(Efficiencies {
        parallel: float_value(report, LABEL_PARALLEL_EFF)?,
        load_balance: float_value(report, LABEL_LOAD_BALANCE)?,
        communication: float_value(report, LABEL_COMM_EFF)?,
    })
}

fn require<'a>(report: &'a ReportText, label: &'static str) -> Result<&'a str, ReportError> {
    let found = match SCANNERS.get(label) {
        Some(scanner) => scanner.scan(&report.contents),
        None => extract_value(&report.contents, label),
    };
    found.ok_or_else(|| ReportError::MissingLabel {
        path: report.path.clone(),
        label,
    })
}

fn malformed(
    report: &ReportText,
    label: &'static str,
    value: &str,
    reason: String,
) -> ReportError {
    ReportError::MalformedValue {
        path: report.path.clone(),
        label,
        value: value.to_string(),
        reason,
    }
}

/// Rank and node counts: strictly positive integers.
fn count_value(report: &ReportText, label: &'static str) -> Result<u32, ReportError> {
    let token = require(report, label)?;
    let value =
        u32::from_str(token).map_err(|e| malformed(report, label, token, e.to_string()))?;
    if value == 0 {
        return Err(malformed(report, label, token, "must be positive".to_string()));
    }
    Ok(value)
}

fn float_value(report: &ReportText, label: &'static str) -> Result<f64, ReportError> {
    let token = require(report, label)?;
    let value =
        f64::from_str(token).map_err(|e| malformed(report, label, token, e.to_string()))?;
    if !value.is_finite() {
        return Err(malformed(
            report,
            label,
            token,
            "not a finite number".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;
