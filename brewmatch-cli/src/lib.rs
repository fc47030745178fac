//! Command-line interface for the Brewmatch recommendation core.
//!
//! Each subcommand exercises one part of the core: classifying weather
//! codes, replaying a swipe session, building a recommendation and
//! stepping through the drink customiser. Options layer CLI flags over
//! environment variables and configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

mod customize;
mod error;
mod recommend;
mod swipe;
mod weather;

pub use error::CliError;

use customize::CustomizeArgs;
use recommend::RecommendArgs;
use swipe::SwipeArgs;
use weather::WeatherArgs;

const ARG_DECISIONS: &str = "decisions";
const ARG_CATALOG: &str = "catalog";
const ARG_TEMPERATURE: &str = "temperature";
const ARG_WEATHER_CODE: &str = "weather-code";
const ARG_HOUR: &str = "hour";
const ARG_TASTE: &str = "taste";
const ARG_LANGUAGE: &str = "language";
const ENV_DECISIONS: &str = "BREWMATCH_CMDS_SWIPE_DECISIONS";
const ENV_TEMPERATURE: &str = "BREWMATCH_CMDS_RECOMMEND_TEMPERATURE";
const ENV_WEATHER_CODE: &str = "BREWMATCH_CMDS_RECOMMEND_WEATHER_CODE";
const ENV_HOUR: &str = "BREWMATCH_CMDS_RECOMMEND_HOUR";
const ENV_TASTE: &str = "BREWMATCH_CMDS_RECOMMEND_TASTE";

/// Install the stderr log subscriber, filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
///
/// # Errors
/// Fails when a global subscriber or logger is already installed.
pub fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}

/// Run the Brewmatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the selected
/// command fail.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with_args(std::env::args_os(), &mut stdout)
}

/// Run the Brewmatch CLI with explicit arguments, writing command output to
/// `writer`.
///
/// The first argument is the program name. Environment variables and
/// configuration files are still consulted for unset options.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the selected
/// command fail.
pub fn run_with_args<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    dispatch(cli.command, writer)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Weather(args) => weather::run_weather(&args, writer),
        Command::Swipe(args) => swipe::run_swipe(args, writer),
        Command::Recommend(args) => recommend::run_recommend(args, writer),
        Command::Customize(args) => customize::run_customize(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "brewmatch",
    about = "Weather-aware drink recommendations and swipe matching",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a WMO weather code and render the dashboard weather line.
    Weather(WeatherArgs),
    /// Replay like/pass decisions over a catalogue and print the match.
    Swipe(SwipeArgs),
    /// Recommend a drink for the current weather, hour and taste.
    Recommend(RecommendArgs),
    /// Step through the drink customiser layers.
    Customize(CustomizeArgs),
}

fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

fn write_json<T: serde::Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    write_line(writer, &payload)
}

#[cfg(test)]
mod tests;
