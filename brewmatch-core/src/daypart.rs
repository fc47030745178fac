//! Coarse time-of-day buckets used to frame a recommendation.
//!
//! # Examples
//! ```
//! use brewmatch_core::TimeOfDay;
//!
//! assert_eq!(TimeOfDay::from_hour(9), TimeOfDay::Morning);
//! assert_eq!(TimeOfDay::from_hour(14).to_string(), "Afternoon");
//! assert_eq!(TimeOfDay::Evening.greeting("Humza"), "Good Evening, Humza");
//! ```

use thiserror::Error;

/// Part of the day in the user's local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    /// Before noon.
    #[default]
    Morning,
    /// Noon until five in the afternoon.
    Afternoon,
    /// Five in the afternoon onwards.
    Evening,
}

impl TimeOfDay {
    /// Bucket a local hour (`0..=23`).
    ///
    /// Hours above 23 are treated as evening.
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 17 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }

    /// Return the bucket name as shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Greeting line for the dashboard header.
    #[must_use]
    pub fn greeting(self, name: &str) -> String {
        format!("Good {}, {name}", self.as_str())
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time of day '{input}'")]
pub struct ParseTimeOfDayError {
    /// Rejected input.
    pub input: String,
}

impl std::str::FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(ParseTimeOfDayError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(0, TimeOfDay::Morning)]
    #[case(11, TimeOfDay::Morning)]
    #[case(12, TimeOfDay::Afternoon)]
    #[case(16, TimeOfDay::Afternoon)]
    #[case(17, TimeOfDay::Evening)]
    #[case(23, TimeOfDay::Evening)]
    #[case(200, TimeOfDay::Evening)]
    fn buckets_hours(#[case] hour: u8, #[case] expected: TimeOfDay) {
        assert_eq!(TimeOfDay::from_hour(hour), expected);
    }

    #[rstest]
    #[case("Morning", TimeOfDay::Morning)]
    #[case("AFTERNOON", TimeOfDay::Afternoon)]
    #[case(" evening ", TimeOfDay::Evening)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: TimeOfDay) {
        assert_eq!(TimeOfDay::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = TimeOfDay::from_str("midnight").expect_err("unknown bucket");
        assert!(err.to_string().contains("midnight"));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(TimeOfDay::Afternoon.to_string(), TimeOfDay::Afternoon.as_str());
    }
}
