use std::path::PathBuf;

use crate::model::{ReportRecord, ScalingMetrics, ScalingMode};

#[derive(Debug, thiserror::Error)]
pub enum ScalingError {
    #[error("report {}: average useful time is zero, computational scaling is undefined", path.display())]
    ZeroUsefulTime { path: PathBuf },
    #[error("report {}: computational scaling is not a finite number", path.display())]
    NonFiniteScaling { path: PathBuf },
}

/// Orders records by rank count. The sort is stable, so runs with the same
/// rank count keep their command-line order.
pub fn sort_by_ranks(records: &mut [ReportRecord]) {
    records.sort_by_key(|r| r.raw.ranks);
}

/// Attaches computational scaling and global efficiency to every record,
/// relative to the first one. Callers sort beforehand. Either every record
/// is scaled or none is.
pub fn compute_scaling(
    records: &mut [ReportRecord],
    mode: ScalingMode,
) -> Result<(), ScalingError> {
    if let Some(r) = records.iter().find(|r| r.raw.t_avg_useful == 0.0) {
        return Err(ScalingError::ZeroUsefulTime {
            path: r.source.clone(),
        });
    }
    let Some(reference) = records.first() else {
        return Ok(());
    };
    let ref_avg_useful = reference.raw.t_avg_useful;
    let ref_ranks = f64::from(reference.raw.ranks);

    let mut scaled = Vec::with_capacity(records.len());
    for m in records.iter() {
        let mut computational_scaling = ref_avg_useful / m.raw.t_avg_useful;
        if mode == ScalingMode::Strong {
            computational_scaling *= ref_ranks / f64::from(m.raw.ranks);
        }
        let global_efficiency = m.efficiencies.parallel * computational_scaling;
        if !computational_scaling.is_finite() || !global_efficiency.is_finite() {
            return Err(ScalingError::NonFiniteScaling {
                path: m.source.clone(),
            });
        }
        scaled.push(ScalingMetrics {
            computational_scaling,
            global_efficiency,
        });
    }

    for (m, scaling) in records.iter_mut().zip(scaled) {
        m.scaling = Some(scaling);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scaling.rs"]
mod tests;
