use std::path::PathBuf;

/// Timing and size figures of one run. Times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMetrics {
    pub ranks: u32,
    pub nodes: u32,
    pub t_elapsed: f64,
    pub t_useful: f64,
    pub t_mpi: f64,
    pub t_avg_useful: f64,
}

/// POP efficiencies as reported by TALP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiencies {
    pub parallel: f64,
    pub load_balance: f64,
    pub communication: f64,
}

/// Figures relative to the baseline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingMetrics {
    pub computational_scaling: f64,
    pub global_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    pub source: PathBuf,
    pub raw: RawMetrics,
    pub efficiencies: Efficiencies,
    pub scaling: Option<ScalingMetrics>,
}
