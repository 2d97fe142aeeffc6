use super::*;

#[test]
fn test_cli_default_scaling_is_weak() {
    let cli = Cli::try_parse_from(["talp2pop", "a.txt", "b.txt"]).unwrap();
    assert_eq!(cli.scaling, ScalingMode::Weak);
    assert_eq!(
        cli.talp_report,
        vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
    );
}

#[test]
fn test_cli_strong_scaling() {
    let cli = Cli::try_parse_from(["talp2pop", "-s", "strong", "a.txt"]).unwrap();
    assert_eq!(cli.scaling, ScalingMode::Strong);

    let cli = Cli::try_parse_from(["talp2pop", "a.txt", "--scaling", "weak"]).unwrap();
    assert_eq!(cli.scaling, ScalingMode::Weak);
}

#[test]
fn test_cli_rejects_unknown_scaling() {
    assert!(Cli::try_parse_from(["talp2pop", "-s", "linear", "a.txt"]).is_err());
}

#[test]
fn test_cli_requires_a_report() {
    assert!(Cli::try_parse_from(["talp2pop"]).is_err());
    assert!(Cli::try_parse_from(["talp2pop", "-s", "weak"]).is_err());
}

#[test]
fn test_cli_into_run_config() {
    let cli = Cli::try_parse_from(["talp2pop", "-s", "strong", "r.txt"]).unwrap();
    let config = RunConfig::from(cli);
    assert_eq!(config.reports, vec![PathBuf::from("r.txt")]);
    assert_eq!(config.scaling, ScalingMode::Strong);
}

#[test]
fn test_scaling_mode_display() {
    assert_eq!(ScalingMode::Weak.to_string(), "weak");
    assert_eq!(ScalingMode::Strong.to_string(), "strong");
}

#[test]
fn test_failure_diagnostic_written_with_logging_off() {
    let subscriber = build_subscriber(&LogConfig {
        default_directive: "off".to_string(),
        ansi: false,
    });
    let mut diag = Vec::new();
    let code = tracing::subscriber::with_default(subscriber, || {
        run_reporting(
            RunConfig {
                reports: vec![PathBuf::from("/nonexistent/talp2pop/report.txt")],
                scaling: ScalingMode::Weak,
            },
            &mut diag,
        )
    });
    assert_eq!(code, 1);
    let text = String::from_utf8(diag).unwrap();
    assert!(text.contains("/nonexistent/talp2pop/report.txt"), "{text}");
    assert!(text.ends_with('\n'));
}
