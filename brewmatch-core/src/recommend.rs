//! Contract with the external drink recommendation collaborator.
//!
//! The collaborator (typically a prompt-driven model behind a network
//! call) receives the current temperature, the time of day and the user's
//! taste profile and answers with a drink, a title and a short rationale.
//! This module defines that shape, the [`Recommender`] seam and the static
//! fallback used whenever the collaborator cannot answer.

use log::warn;
use thiserror::Error;

use crate::{TimeOfDay, WeatherSnapshot};

/// Title of the static fallback recommendation.
pub const FALLBACK_TITLE: &str = "Made for You";
/// Drink of the static fallback recommendation.
pub const FALLBACK_DRINK: &str = "Caramel Latte";
/// Reason of the static fallback recommendation.
pub const FALLBACK_REASON: &str = "Based on your preferences";

/// Input forwarded to a [`Recommender`].
///
/// Serialises with camelCase keys (`temperature`, `timeOfDay`,
/// `userTaste`).
///
/// # Examples
/// ```rust
/// use brewmatch_core::{RecommendationRequest, TimeOfDay};
///
/// # fn main() -> Result<(), brewmatch_core::RequestValidationError> {
/// let request = RecommendationRequest::new(34.0, TimeOfDay::Afternoon, "Caramel & Cold Brew")?;
/// assert_eq!(request.time_of_day, TimeOfDay::Afternoon);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendationRequest {
    /// Current temperature in degrees Celsius.
    pub temperature: f64,
    /// Part of the day in the user's local time.
    pub time_of_day: TimeOfDay,
    /// Free-form description of the user's taste.
    pub user_taste: String,
}

/// Reasons a [`RecommendationRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// The temperature was NaN or infinite.
    #[error("temperature must be a finite number")]
    NonFiniteTemperature,
    /// The taste profile was empty or whitespace.
    #[error("user taste must not be blank")]
    BlankTaste,
}

impl RecommendationRequest {
    /// Validate and construct a request.
    ///
    /// # Errors
    /// Returns [`RequestValidationError`] for a non-finite temperature or a
    /// blank taste profile.
    pub fn new(
        temperature: f64,
        time_of_day: TimeOfDay,
        user_taste: impl Into<String>,
    ) -> Result<Self, RequestValidationError> {
        let request = Self {
            temperature,
            time_of_day,
            user_taste: user_taste.into(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the invariants enforced by [`RecommendationRequest::new`].
    ///
    /// # Errors
    /// See [`RecommendationRequest::new`].
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if !self.temperature.is_finite() {
            return Err(RequestValidationError::NonFiniteTemperature);
        }
        if self.user_taste.trim().is_empty() {
            return Err(RequestValidationError::BlankTaste);
        }
        Ok(())
    }
}

/// A recommended drink with its framing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Headline shown above the drink.
    pub title: String,
    /// Why the drink suits the conditions.
    pub reason: String,
    /// Name of the recommended drink.
    pub drink: String,
}

impl Recommendation {
    /// The static choice shown when no tailored recommendation exists.
    ///
    /// # Examples
    /// ```
    /// use brewmatch_core::Recommendation;
    ///
    /// let fallback = Recommendation::fallback();
    /// assert_eq!(fallback.drink, "Caramel Latte");
    /// ```
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_owned(),
            reason: FALLBACK_REASON.to_owned(),
            drink: FALLBACK_DRINK.to_owned(),
        }
    }
}

/// Failures reported by a [`Recommender`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The request failed validation before being sent.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
    /// The collaborator could not be reached or timed out.
    #[error("recommendation service unavailable: {message}")]
    Unavailable {
        /// Description of the transport failure.
        message: String,
    },
    /// The collaborator answered without a usable recommendation.
    #[error("recommendation service returned no usable output")]
    EmptyResponse,
}

/// Produce a drink recommendation for a request.
///
/// Implementations wrap the external collaborator. They must be
/// `Send + Sync` so hosts can share them, and must report failures as
/// [`RecommendError`] rather than panicking.
///
/// # Examples
///
/// ```rust
/// use brewmatch_core::{
///     Recommendation, RecommendError, RecommendationRequest, Recommender, TimeOfDay,
/// };
///
/// struct IcedForHotDays;
///
/// impl Recommender for IcedForHotDays {
///     fn recommend(
///         &self,
///         request: &RecommendationRequest,
///     ) -> Result<Recommendation, RecommendError> {
///         let drink = if request.temperature > 30.0 { "Cold Brew" } else { "Flat White" };
///         Ok(Recommendation {
///             title: "Today's pick".into(),
///             reason: "Matched to the weather".into(),
///             drink: drink.into(),
///         })
///     }
/// }
///
/// let request = RecommendationRequest::new(38.0, TimeOfDay::Afternoon, "Caramel").unwrap();
/// assert_eq!(IcedForHotDays.recommend(&request).unwrap().drink, "Cold Brew");
/// ```
pub trait Recommender: Send + Sync {
    /// Recommend a drink for `request`.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when no recommendation can be produced.
    fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation, RecommendError>;
}

/// Recommender that always answers with [`Recommendation::fallback`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRecommender;

impl Recommender for FallbackRecommender {
    fn recommend(&self, _request: &RecommendationRequest) -> Result<Recommendation, RecommendError> {
        Ok(Recommendation::fallback())
    }
}

/// Ask `recommender` for a drink, substituting the fallback on failure.
pub fn recommend_or_fallback<R>(recommender: &R, request: &RecommendationRequest) -> Recommendation
where
    R: Recommender + ?Sized,
{
    match recommender.recommend(request) {
        Ok(recommendation) => recommendation,
        Err(err) => {
            warn!("recommendation failed, using the static choice: {err}");
            Recommendation::fallback()
        }
    }
}

/// Recommend a drink for the current dashboard context.
///
/// The collaborator is consulted only when the snapshot carries a
/// temperature and the taste profile is not blank; otherwise the fallback
/// is returned directly.
pub fn recommend_for_snapshot<R>(
    recommender: &R,
    snapshot: &WeatherSnapshot,
    time_of_day: TimeOfDay,
    user_taste: &str,
) -> Recommendation
where
    R: Recommender + ?Sized,
{
    let Some(temperature) = snapshot.temperature() else {
        return Recommendation::fallback();
    };
    match RecommendationRequest::new(f64::from(temperature), time_of_day, user_taste) {
        Ok(request) => recommend_or_fallback(recommender, &request),
        Err(err) => {
            warn!("skipping recommendation service: {err}");
            Recommendation::fallback()
        }
    }
}
