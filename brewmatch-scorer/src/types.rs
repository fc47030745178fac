//! Decisions, accumulated scores and session outcomes.
#![forbid(unsafe_code)]

use brewmatch_core::{Category, Drink, DrinkId};

use crate::ParseDecisionError;

/// Score added to a category when one of its drinks is liked.
pub const LIKE_WEIGHT: f32 = 1.0_f32;
/// Score added to a category when one of its drinks is passed.
pub const PASS_WEIGHT: f32 = -0.5_f32;

/// A single swipe on the current drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Decision {
    /// Swiped right.
    Like,
    /// Swiped left.
    Pass,
}

impl Decision {
    /// Translate a liked flag into a decision.
    #[must_use]
    pub const fn from_liked(liked: bool) -> Self {
        if liked { Self::Like } else { Self::Pass }
    }

    /// Score contribution of this decision.
    #[must_use]
    pub const fn weight(self) -> f32 {
        match self {
            Self::Like => LIKE_WEIGHT,
            Self::Pass => PASS_WEIGHT,
        }
    }
}

impl std::str::FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "pass" => Ok(Self::Pass),
            _ => Err(ParseDecisionError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Per-category scores in first-encounter order.
///
/// Categories appear only once a drink in them has been decided and are
/// never removed. Order matters: [`PreferenceScores::top`] breaks ties in
/// favour of the earliest category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceScores {
    entries: Vec<(Category, f32)>,
}

impl PreferenceScores {
    /// Construct an empty score map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `delta` to `category`, inserting it at `0.0` when unseen.
    #[expect(
        clippy::float_arithmetic,
        reason = "scores accumulate fractional swipe weights"
    )]
    pub(crate) fn add(&mut self, category: &Category, delta: f32) {
        if let Some((_, score)) = self.entries.iter_mut().find(|(seen, _)| seen == category) {
            *score += delta;
        } else {
            self.entries.push((category.clone(), 0.0_f32 + delta));
        }
    }

    /// Return the score for `category`, if it has been encountered.
    #[must_use]
    pub fn get(&self, category: &Category) -> Option<f32> {
        self.entries
            .iter()
            .find(|(seen, _)| seen == category)
            .map(|(_, score)| *score)
    }

    /// Highest-scoring category; the earliest one wins a tie.
    #[must_use]
    pub fn top(&self) -> Option<(&Category, f32)> {
        let mut best: Option<(&Category, f32)> = None;
        for (category, score) in &self.entries {
            match best {
                Some((_, best_score)) if *score <= best_score => {}
                _ => best = Some((category, *score)),
            }
        }
        best
    }

    /// Iterate over `(category, score)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, f32)> {
        self.entries.iter().map(|(category, score)| (category, *score))
    }

    /// Number of categories encountered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no category has been scored yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a finished swipe session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum SwipeOutcome {
    /// A winning category and its representative drink.
    Match {
        /// Top-scoring category.
        category: Category,
        /// First catalogue drink in that category.
        drink: Drink,
        /// Final score of the category.
        score: f32,
    },
    /// Nothing was scored, so there is nothing to recommend.
    NoRecommendation,
}

impl SwipeOutcome {
    /// Winning category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&Category> {
        match self {
            Self::Match { category, .. } => Some(category),
            Self::NoRecommendation => None,
        }
    }

    /// Representative drink, if any.
    #[must_use]
    pub const fn drink(&self) -> Option<&Drink> {
        match self {
            Self::Match { drink, .. } => Some(drink),
            Self::NoRecommendation => None,
        }
    }

    /// Identifier of the representative drink, if any.
    #[must_use]
    pub const fn drink_id(&self) -> Option<DrinkId> {
        match self {
            Self::Match { drink, .. } => Some(drink.id),
            Self::NoRecommendation => None,
        }
    }

    /// One-line explanation shown under the match card.
    #[must_use]
    pub fn explanation(&self) -> String {
        match self {
            Self::Match { category, .. } => {
                format!("Matched because you liked {category} drinks")
            }
            Self::NoRecommendation => "No strong preference detected".to_owned(),
        }
    }
}
