//! Weather command implementation for the Brewmatch CLI.

use brewmatch_core::{WeatherSnapshot, classify};
use clap::Parser;
use std::io::Write;

use crate::{CliError, write_line};

/// CLI arguments for the `weather` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    about = "Classify a WMO weather code",
    long_about = "Classify a WMO weather code into its display condition. \
                  With --temperature the full dashboard line is printed, \
                  rounding the reading to whole degrees Celsius."
)]
pub(crate) struct WeatherArgs {
    /// WMO weather interpretation code.
    #[arg(value_name = "code", allow_negative_numbers = true)]
    pub(crate) code: i32,
    /// Current temperature in degrees Celsius.
    #[arg(long, value_name = "celsius", allow_negative_numbers = true)]
    pub(crate) temperature: Option<f64>,
}

pub(crate) fn run_weather(args: &WeatherArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let line = render_weather(args);
    write_line(writer, &line)
}

fn render_weather(args: &WeatherArgs) -> String {
    args.temperature.map_or_else(
        || classify(args.code).label().to_owned(),
        |temperature| WeatherSnapshot::observed(temperature, args.code).to_string(),
    )
}
