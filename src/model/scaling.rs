use std::fmt;

/// How the work per run relates to the rank count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScalingMode {
    /// Constant work per rank.
    #[default]
    Weak,
    /// Constant total work.
    Strong,
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingMode::Weak => f.write_str("weak"),
            ScalingMode::Strong => f.write_str("strong"),
        }
    }
}
