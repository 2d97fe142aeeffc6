mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::logging::{LogConfig, build_subscriber};
use crate::model::ScalingMode;
use crate::pipeline::{RunConfig, RunError, run_pipeline};

#[derive(Debug, Parser)]
#[command(name = "talp2pop")]
#[command(about = "Calculate POP metrics from one or more TALP reports")]
#[command(version)]
struct Cli {
    /// Path to a TALP report (plain text, or gzip-compressed with a .gz suffix)
    #[arg(required = true, value_name = "TALP_REPORT")]
    talp_report: Vec<PathBuf>,

    /// Type of scaling
    #[arg(short, long, value_enum, default_value_t = ScalingMode::Weak)]
    scaling: ScalingMode,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            reports: cli.talp_report,
            scaling: cli.scaling,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let subscriber = build_subscriber(&LogConfig::default());
    let code = tracing::subscriber::with_default(subscriber, || {
        run_reporting(cli.into(), &mut std::io::stderr())
    });
    if code != 0 {
        std::process::exit(code);
    }
}

/// Runs and writes any failure to `diag`, independent of the log filter.
fn run_reporting(config: RunConfig, diag: &mut impl Write) -> i32 {
    match run(config) {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(diag, "{err}");
            1
        }
    }
}

fn run(config: RunConfig) -> Result<(), RunError> {
    let table = run_pipeline(&config)?;
    println!("{table}");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
