//! Weather classification for the dashboard's context line.
//!
//! Weather providers report conditions as small integer codes (the WMO
//! interpretation codes used by Open-Meteo). [`classify`] turns a code into
//! a [`Condition`]; [`WeatherSnapshot`] pairs it with a rounded
//! temperature.
//!
//! # Examples
//! ```
//! use brewmatch_core::{Condition, classify};
//!
//! assert_eq!(classify(0), Condition::ClearSky);
//! assert_eq!(classify(63).label(), "Rain");
//! assert_eq!(classify(20).label(), "Clear");
//! ```

use log::debug;

/// Label reported when no weather reading is available.
pub const UNAVAILABLE_LABEL: &str = "Unavailable";

/// Human-readable weather condition.
///
/// [`Condition::Clear`] is the fallback for codes outside every known
/// range. Its label is `"Clear"`, distinct from code 0's `"Clear sky"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Code 0.
    ClearSky,
    /// Code 1.
    MainlyClear,
    /// Code 2.
    PartlyCloudy,
    /// Code 3.
    Overcast,
    /// Codes 45 to 48.
    Fog,
    /// Codes 51 to 57.
    Drizzle,
    /// Codes 61 to 67.
    Rain,
    /// Codes 71 to 77.
    Snow,
    /// Codes 80 to 82.
    RainShowers,
    /// Codes 85 and 86.
    SnowShowers,
    /// Code 95.
    Thunderstorm,
    /// Codes 96 to 99.
    ThunderstormWithHail,
    /// Any code not covered above.
    Clear,
}

impl Condition {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with hail",
            Self::Clear => "Clear",
        }
    }

    /// Report whether this is the fallback for an unrecognised code.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Clear)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a weather code to its condition.
///
/// Total and side-effect free apart from a debug log line for codes that
/// fall through to [`Condition::Clear`].
#[must_use]
pub fn classify(code: i32) -> Condition {
    let condition = match code {
        0 => Condition::ClearSky,
        1 => Condition::MainlyClear,
        2 => Condition::PartlyCloudy,
        3 => Condition::Overcast,
        45..=48 => Condition::Fog,
        51..=57 => Condition::Drizzle,
        61..=67 => Condition::Rain,
        71..=77 => Condition::Snow,
        80..=82 => Condition::RainShowers,
        85..=86 => Condition::SnowShowers,
        95 => Condition::Thunderstorm,
        96..=99 => Condition::ThunderstormWithHail,
        _ => Condition::Clear,
    };
    if condition.is_fallback() {
        debug!("weather code {code} is not recognised; reporting it as clear");
    }
    condition
}

/// Current weather as shown on the dashboard.
///
/// # Examples
/// ```
/// use brewmatch_core::{Condition, WeatherSnapshot};
///
/// let snapshot = WeatherSnapshot::observed(31.6, 1);
/// assert_eq!(snapshot.temperature(), Some(32));
/// assert_eq!(snapshot.condition(), Some(Condition::MainlyClear));
/// assert_eq!(snapshot.to_string(), "32°C · Mainly clear");
///
/// assert_eq!(WeatherSnapshot::unavailable().to_string(), "--°C · Unavailable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "camelCase"))]
pub enum WeatherSnapshot {
    /// A reading was obtained.
    Observed {
        /// Whole degrees Celsius.
        temperature: i32,
        /// Classified condition.
        condition: Condition,
    },
    /// No reading could be obtained.
    Unavailable,
}

impl WeatherSnapshot {
    /// Build a snapshot from a raw reading.
    ///
    /// The temperature is rounded half up to whole degrees. Non-finite
    /// temperatures produce [`WeatherSnapshot::Unavailable`].
    #[must_use]
    pub fn observed(temperature_c: f64, code: i32) -> Self {
        round_half_up(temperature_c).map_or(Self::Unavailable, |temperature| Self::Observed {
            temperature,
            condition: classify(code),
        })
    }

    /// A snapshot for when the weather source failed.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self::Unavailable
    }

    /// Rounded temperature, when observed.
    #[must_use]
    pub const fn temperature(&self) -> Option<i32> {
        match self {
            Self::Observed { temperature, .. } => Some(*temperature),
            Self::Unavailable => None,
        }
    }

    /// Classified condition, when observed.
    #[must_use]
    pub const fn condition(&self) -> Option<Condition> {
        match self {
            Self::Observed { condition, .. } => Some(*condition),
            Self::Unavailable => None,
        }
    }

    /// Condition label, or `"Unavailable"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Observed { condition, .. } => condition.label(),
            Self::Unavailable => UNAVAILABLE_LABEL,
        }
    }
}

impl std::fmt::Display for WeatherSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.temperature() {
            Some(temperature) => write!(f, "{temperature}°C · {}", self.label()),
            None => write!(f, "--°C · {}", self.label()),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "rounding a reading to whole degrees; `as` saturates out-of-range values"
)]
fn round_half_up(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    Some((value + 0.5_f64).floor() as i32)
}
