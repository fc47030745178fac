//! The swipe session state machine.
//!
//! A session is `Active` while undecided drinks remain and becomes
//! `Finished` exactly when the cursor moves past the last drink. An empty
//! catalogue therefore starts finished.
#![forbid(unsafe_code)]

use brewmatch_core::{Catalog, Drink};
use log::{debug, warn};

use crate::{Decision, PreferenceScores, SwipeError, SwipeOutcome};

/// Lifecycle state of a [`SwipeSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Drinks remain to be decided.
    Active,
    /// Every drink has been decided.
    Finished,
}

/// One run of swipe decisions over a catalogue.
///
/// # Examples
/// ```
/// use brewmatch_core::{Catalog, Drink};
/// use brewmatch_scorer::{SessionState, SwipeError, SwipeSession};
///
/// let catalog = Catalog::new(vec![Drink::new(1, "tea", "Chai Latte")]).unwrap();
/// let mut session = SwipeSession::new(&catalog);
/// assert_eq!(session.decide(true), Ok(SessionState::Finished));
/// assert_eq!(session.decide(true), Err(SwipeError::Finished { decided: 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct SwipeSession<'a> {
    catalog: &'a Catalog,
    cursor: usize,
    scores: PreferenceScores,
}

impl<'a> SwipeSession<'a> {
    /// Start a fresh session at the first drink of `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            scores: PreferenceScores::new(),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.cursor < self.catalog.len() {
            SessionState::Active
        } else {
            SessionState::Finished
        }
    }

    /// Report whether every drink has been decided.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state(), SessionState::Finished)
    }

    /// Number of decisions accepted so far.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Drinks left to decide.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.catalog.len().saturating_sub(self.cursor)
    }

    /// Drink awaiting a decision, or `None` once finished.
    #[must_use]
    pub fn current(&self) -> Option<&'a Drink> {
        self.catalog.get(self.cursor)
    }

    /// Scores accumulated so far.
    #[must_use]
    pub const fn scores(&self) -> &PreferenceScores {
        &self.scores
    }

    /// Record a like (`true`) or pass (`false`) for the current drink.
    ///
    /// # Errors
    /// Returns [`SwipeError::Finished`] when every drink has already been
    /// decided. The session is left unchanged.
    pub fn decide(&mut self, liked: bool) -> Result<SessionState, SwipeError> {
        self.decide_with(Decision::from_liked(liked))
    }

    /// Record `decision` for the current drink and advance.
    ///
    /// # Errors
    /// See [`SwipeSession::decide`].
    pub fn decide_with(&mut self, decision: Decision) -> Result<SessionState, SwipeError> {
        let Some(drink) = self.current() else {
            warn!(
                "ignoring {decision:?}: session finished after {} decisions",
                self.cursor
            );
            return Err(SwipeError::Finished {
                decided: self.cursor,
            });
        };
        self.scores.add(&drink.category, decision.weight());
        self.cursor += 1;
        debug!(
            "{decision:?} on drink {} ({}); {} remaining",
            drink.id,
            drink.category,
            self.remaining()
        );
        Ok(self.state())
    }

    /// Apply `decisions` in order, stopping at the first rejected one.
    ///
    /// # Errors
    /// Returns [`SwipeError::Finished`] when more decisions are supplied than
    /// drinks remain. Decisions before the rejected one stay applied.
    pub fn run<I>(&mut self, decisions: I) -> Result<SessionState, SwipeError>
    where
        I: IntoIterator<Item = Decision>,
    {
        let mut state = self.state();
        for decision in decisions {
            state = self.decide_with(decision)?;
        }
        Ok(state)
    }

    /// Top category and its first drink, once the session is finished.
    ///
    /// Calling this repeatedly returns the same outcome.
    ///
    /// # Errors
    /// Returns [`SwipeError::Active`] while drinks remain undecided.
    pub fn result(&self) -> Result<SwipeOutcome, SwipeError> {
        if !self.is_finished() {
            return Err(SwipeError::Active {
                remaining: self.remaining(),
            });
        }
        let Some((category, score)) = self.scores.top() else {
            return Ok(SwipeOutcome::NoRecommendation);
        };
        let Some(drink) = self.catalog.first_in(category) else {
            warn!("no drink in catalogue for winning category {category}");
            return Ok(SwipeOutcome::NoRecommendation);
        };
        Ok(SwipeOutcome::Match {
            category: category.clone(),
            drink: drink.clone(),
            score,
        })
    }
}
