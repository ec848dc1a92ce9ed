use super::*;
use crate::sample::clip;

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from(["happydex-cli", "analyze", "what a day"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Analyze { ref text }) if text == "what a day"
    ));
}

#[test]
fn analyze_requires_text() {
    assert!(Cli::try_parse_from(["happydex-cli", "analyze"]).is_err());
}

#[test]
fn parses_sample_source() {
    let cli = Cli::try_parse_from(["happydex-cli", "sample", "--source", "google_trends"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Sample {
            source: Source::GoogleTrends
        })
    ));
}

#[test]
fn sample_rejects_unknown_source() {
    let result = Cli::try_parse_from(["happydex-cli", "sample", "--source", "myspace"]);
    assert!(result.is_err());
}

#[test]
fn simulate_defaults_to_one_rotation() {
    let cli = Cli::try_parse_from(["happydex-cli", "simulate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Simulate { cycles: 7 })));
}

#[test]
fn simulate_accepts_cycle_count() {
    let cli = Cli::try_parse_from(["happydex-cli", "simulate", "--cycles", "3"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Simulate { cycles: 3 })));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["happydex-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn run_analyze_accepts_empty_text() {
    run_analyze("").expect("empty text scores neutral");
}

#[test]
fn clip_keeps_short_text() {
    assert_eq!(clip("short  text\nhere", 60), "short text here");
}

#[test]
fn clip_truncates_long_text_with_ellipsis() {
    let clipped = clip(&"a".repeat(100), 10);
    assert_eq!(clipped, "aaaaaaa...");
    assert_eq!(clipped.chars().count(), 10);
}
