//! Customize command implementation for the Brewmatch CLI.

use brewmatch_core::{Customization, Language, Layer};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_LANGUAGE, CliError, write_line};

/// CLI arguments for the `customize` subcommand.
///
/// Each layer flag moves that many options from the first one; negative
/// values move left and wrap to the end of the list.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "customize",
    long_about = "Step through the drink customiser. Each layer starts on \
                  its first option; the layer flags move right (positive) \
                  or left (negative) with wraparound. Labels are printed in \
                  English or Arabic.",
    about = "Step through the drink customiser layers"
)]
#[ortho_config(prefix = "BREWMATCH")]
pub(crate) struct CustomizeArgs {
    /// Steps to move the foam layer.
    #[arg(long, value_name = "steps", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) foam: Option<i32>,
    /// Steps to move the ice layer.
    #[arg(long, value_name = "steps", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) ice: Option<i32>,
    /// Steps to move the milk layer.
    #[arg(long, value_name = "steps", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) milk: Option<i32>,
    /// Steps to move the base layer.
    #[arg(long, value_name = "steps", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) base: Option<i32>,
    /// Steps to move the syrup layer.
    #[arg(long, value_name = "steps", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) syrup: Option<i32>,
    /// Label language: "en" or "ar".
    #[arg(long = ARG_LANGUAGE, value_name = "lang")]
    #[serde(default)]
    pub(crate) language: Option<String>,
}

impl CustomizeArgs {
    pub(crate) fn into_config(self) -> Result<CustomizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CustomizeConfig::try_from(merged)
    }

    const fn steps(&self, layer: Layer) -> i32 {
        let steps = match layer {
            Layer::Foam => self.foam,
            Layer::Ice => self.ice,
            Layer::Milk => self.milk,
            Layer::Base => self.base,
            Layer::Syrup => self.syrup,
        };
        match steps {
            Some(value) => value,
            None => 0,
        }
    }
}

/// Resolved `customize` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CustomizeConfig {
    pub(crate) customization: Customization,
    pub(crate) language: Language,
}

impl TryFrom<CustomizeArgs> for CustomizeConfig {
    type Error = CliError;

    fn try_from(args: CustomizeArgs) -> Result<Self, Self::Error> {
        let language = args
            .language
            .as_deref()
            .map_or(Ok(Language::default()), str::parse::<Language>)?;
        let mut customization = Customization::new();
        for layer in Layer::ALL {
            customization.step_by(layer, args.steps(layer));
        }
        Ok(Self {
            customization,
            language,
        })
    }
}

pub(crate) fn run_customize(args: CustomizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    for line in render_customization(&config) {
        write_line(writer, &line)?;
    }
    Ok(())
}

pub(crate) fn render_customization(config: &CustomizeConfig) -> Vec<String> {
    let mut lines = vec![config.language.customizer_title().to_owned()];
    lines.extend(Layer::ALL.iter().map(|&layer| {
        let option = config.customization.option(layer);
        format!(
            "{}: {} ({})",
            layer.label(config.language),
            option.label(config.language),
            option.color()
        )
    }));
    lines
}
