//! Recommend command implementation for the Brewmatch CLI.

use brewmatch_core::{
    FallbackRecommender, Recommendation, RecommendationRequest, Recommender,
    RequestValidationError, TimeOfDay, WeatherSnapshot, recommend_for_snapshot,
};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_HOUR, ARG_TASTE, ARG_TEMPERATURE, ARG_WEATHER_CODE, CliError, ENV_HOUR, ENV_TASTE,
    ENV_TEMPERATURE, ENV_WEATHER_CODE, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Build a recommendation request from the current weather, \
                  the local hour and the user's taste profile. Without a \
                  temperature reading the weather is reported as unavailable \
                  and the static recommendation is returned; a weather code \
                  needs a temperature to go with it.",
    about = "Recommend a drink for the current conditions"
)]
#[ortho_config(prefix = "BREWMATCH")]
pub(crate) struct RecommendArgs {
    /// Current temperature in degrees Celsius.
    #[arg(long = ARG_TEMPERATURE, value_name = "celsius", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) temperature: Option<f64>,
    /// WMO weather code observed with the temperature.
    #[arg(long = ARG_WEATHER_CODE, value_name = "code", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) weather_code: Option<i32>,
    /// Local hour of day (0-23).
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u8>,
    /// Free-form taste profile, e.g. "Caramel & Cold Brew".
    #[arg(long = ARG_TASTE, value_name = "text")]
    #[serde(default)]
    pub(crate) taste: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Weather shown on the dashboard.
    pub(crate) weather: WeatherSnapshot,
    /// Part of the day derived from the hour.
    pub(crate) time_of_day: TimeOfDay,
    /// Taste profile forwarded to the recommender.
    pub(crate) taste: String,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let hour = args.hour.ok_or(CliError::MissingArgument {
            field: ARG_HOUR,
            env: ENV_HOUR,
        })?;
        if hour > 23 {
            return Err(CliError::InvalidHour { hour });
        }
        let taste = args.taste.ok_or(CliError::MissingArgument {
            field: ARG_TASTE,
            env: ENV_TASTE,
        })?;
        if taste.trim().is_empty() {
            return Err(CliError::InvalidRequest(RequestValidationError::BlankTaste));
        }
        let weather = match (args.temperature, args.weather_code) {
            (Some(temperature), Some(code)) => WeatherSnapshot::observed(temperature, code),
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_WEATHER_CODE,
                    env: ENV_WEATHER_CODE,
                });
            }
            // A code without a reading cannot be shown on the dashboard.
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_TEMPERATURE,
                    env: ENV_TEMPERATURE,
                });
            }
            (None, None) => WeatherSnapshot::unavailable(),
        };
        Ok(Self {
            weather,
            time_of_day: TimeOfDay::from_hour(hour),
            taste,
        })
    }
}

/// JSON document printed by the `recommend` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendReport {
    /// Dashboard weather line, e.g. "32°C · Rain".
    pub(crate) weather: String,
    pub(crate) time_of_day: TimeOfDay,
    /// Request sent to the recommender, absent when the weather is unknown.
    pub(crate) request: Option<RecommendationRequest>,
    pub(crate) recommendation: Recommendation,
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_recommend(&config, &FallbackRecommender)?;
    write_json(writer, &report)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    recommender: &dyn Recommender,
) -> Result<RecommendReport, CliError> {
    let request = config
        .weather
        .temperature()
        .map(|temperature| {
            RecommendationRequest::new(f64::from(temperature), config.time_of_day, &*config.taste)
        })
        .transpose()?;
    let recommendation = recommend_for_snapshot(
        recommender,
        &config.weather,
        config.time_of_day,
        &config.taste,
    );
    Ok(RecommendReport {
        weather: config.weather.to_string(),
        time_of_day: config.time_of_day,
        request,
        recommendation,
    })
}
