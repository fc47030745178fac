//! Unit tests for the weather and customize commands and argument parsing.

use super::helpers::output_text;
use super::*;
use crate::customize::{CustomizeArgs, CustomizeConfig, render_customization};
use brewmatch_core::{Language, Layer};
use clap::Parser;
use rstest::rstest;

fn run_cli(args: &[&str]) -> Result<String, CliError> {
    let mut argv = vec!["brewmatch"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv)?;
    let mut stdout = Vec::new();
    dispatch(cli.command, &mut stdout)?;
    Ok(output_text(stdout))
}

#[rstest]
#[case(&["weather", "0"], "Clear sky\n")]
#[case(&["weather", "95"], "Thunderstorm\n")]
#[case(&["weather", "42"], "Clear\n")]
#[case(&["weather", "-7"], "Clear\n")]
#[case(&["weather", "63", "--temperature", "31.6"], "32°C · Rain\n")]
#[case(&["weather", "2", "--temperature", "-0.4"], "0°C · Partly cloudy\n")]
fn weather_command_prints_label(#[case] args: &[&str], #[case] expected: &str) {
    assert_eq!(run_cli(args).expect("weather should succeed"), expected);
}

#[rstest]
fn weather_command_requires_a_numeric_code() {
    let err = run_cli(&["weather", "rain"]).expect_err("non-numeric code");
    assert!(matches!(err, CliError::ArgumentParsing(_)));
}

#[rstest]
fn customize_defaults_to_first_options_in_english() {
    let config = CustomizeConfig::try_from(CustomizeArgs::default()).expect("config");
    let lines = render_customization(&config);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines.first().map(String::as_str), Some("Customize Your Drink"));
    for layer in Layer::ALL {
        assert_eq!(config.customization.index(layer), 0);
    }
}

#[rstest]
fn customize_steps_wrap_in_both_directions() {
    let args = CustomizeArgs {
        ice: Some(-1),
        milk: Some(7),
        syrup: Some(10),
        ..CustomizeArgs::default()
    };
    let config = CustomizeConfig::try_from(args).expect("config");
    assert_eq!(config.customization.index(Layer::Ice), 3);
    assert_eq!(config.customization.index(Layer::Milk), 0);
    assert_eq!(config.customization.index(Layer::Syrup), 1);
    assert_eq!(
        config.customization.option(Layer::Ice).label(Language::English),
        "Extra Ice"
    );
}

#[rstest]
fn customize_command_prints_arabic_labels() {
    let output = run_cli(&["customize", "--ice", "-1", "--language", "ar"]).expect("customize");
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("خصص مشروبك"));
    assert!(output.contains("ثلج: ثلج إضافي"));
}

#[rstest]
fn customize_rejects_unknown_language() {
    let args = CustomizeArgs {
        language: Some("fr".to_owned()),
        ..CustomizeArgs::default()
    };
    let err = CustomizeConfig::try_from(args).expect_err("unsupported language");
    match err {
        CliError::InvalidLanguage(source) => assert_eq!(source.input, "fr"),
        other => panic!("expected InvalidLanguage, found {other:?}"),
    }
}

#[rstest]
fn missing_subcommand_is_a_parse_error() {
    let err = run_cli(&[]).expect_err("subcommand required");
    match err {
        CliError::ArgumentParsing(source) => assert!(!source.to_string().is_empty()),
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}
