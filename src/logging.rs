use tracing_subscriber::EnvFilter;

/// Logging setup for one run. `RUST_LOG` overrides `default_directive`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_directive: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_directive: "info".to_string(),
            ansi: false,
        }
    }
}

impl LogConfig {
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

/// Builds a stderr subscriber; the caller installs it for the scope of the run.
pub fn build_subscriber(
    config: &LogConfig,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .without_time()
        .finish()
}
