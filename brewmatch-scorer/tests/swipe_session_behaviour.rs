#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for swipe sessions over a drink catalogue.

use std::cell::RefCell;

use brewmatch_core::Catalog;
use brewmatch_scorer::{Decision, SwipeError, SwipeOutcome, SwipeSession};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
///
/// Sessions borrow their catalogue, so the context records the catalogue
/// and the decisions and replays them when a step needs the session.
pub struct SwipeContext {
    catalog: RefCell<Option<Catalog>>,
    decisions: RefCell<Vec<Decision>>,
    rejected: RefCell<Option<SwipeError>>,
    after_rejection: RefCell<Option<SwipeOutcome>>,
}

#[fixture]
/// Build a fresh `SwipeContext` for each scenario run.
pub fn context() -> SwipeContext {
    SwipeContext {
        catalog: RefCell::new(None),
        decisions: RefCell::new(Vec::new()),
        rejected: RefCell::new(None),
        after_rejection: RefCell::new(None),
    }
}

impl SwipeContext {
    fn with_session<T>(&self, f: impl FnOnce(&mut SwipeSession<'_>) -> T) -> T {
        let guard = self.catalog.borrow();
        let catalog = guard.as_ref().expect("catalogue must be initialised");
        let mut session = SwipeSession::new(catalog);
        session
            .run(self.decisions.borrow().iter().copied())
            .expect("recorded decisions fit the catalogue");
        f(&mut session)
    }

    /// Result read from the session that rejected the extra swipe, or from a
    /// replay when no extra swipe was attempted.
    fn outcome(&self) -> SwipeOutcome {
        if let Some(outcome) = self.after_rejection.borrow().clone() {
            return outcome;
        }
        self.with_session(|session| session.result().expect("session finished"))
    }
}

#[given("the demo drink catalogue")]
fn demo_catalogue(context: &SwipeContext) {
    *context.catalog.borrow_mut() = Some(Catalog::demo());
}

#[given("an empty drink catalogue")]
fn empty_catalogue(context: &SwipeContext) {
    *context.catalog.borrow_mut() = Some(Catalog::empty());
}

#[when("I swipe like, pass, like, like, pass, pass, like")]
fn mixed_swipes(context: &SwipeContext) {
    context.decisions.borrow_mut().extend([
        Decision::Like,
        Decision::Pass,
        Decision::Like,
        Decision::Like,
        Decision::Pass,
        Decision::Pass,
        Decision::Like,
    ]);
}

#[when("I pass on every drink")]
fn pass_everything(context: &SwipeContext) {
    let count = context
        .catalog
        .borrow()
        .as_ref()
        .map_or(0, Catalog::len);
    context
        .decisions
        .borrow_mut()
        .extend(std::iter::repeat_n(Decision::Pass, count));
}

#[when("I swipe like once more")]
fn extra_swipe(context: &SwipeContext) {
    let (rejected, outcome) = context.with_session(|session| {
        let rejected = session.decide(true).err();
        (rejected, session.result().expect("session finished"))
    });
    *context.rejected.borrow_mut() = rejected;
    *context.after_rejection.borrow_mut() = Some(outcome);
}

#[then("the matched category is \"coffee\"")]
fn matched_coffee(context: &SwipeContext) {
    let outcome = context.outcome();
    assert_eq!(outcome.category().map(|c| c.as_str()), Some("coffee"));
}

#[then("the matched drink is \"Pike Place Roast\"")]
fn matched_pike_place(context: &SwipeContext) {
    let outcome = context.outcome();
    assert_eq!(
        outcome.drink().map(|d| d.name.as_str()),
        Some("Pike Place Roast")
    );
}

#[then("the match score is negative")]
fn negative_score(context: &SwipeContext) {
    match context.outcome() {
        SwipeOutcome::Match { score, .. } => assert!(score < 0.0, "expected negative score"),
        SwipeOutcome::NoRecommendation => panic!("expected a match"),
    }
}

#[then("the extra swipe is rejected because the session is finished")]
fn extra_swipe_rejected(context: &SwipeContext) {
    assert_eq!(
        *context.rejected.borrow(),
        Some(SwipeError::Finished { decided: 7 })
    );
}

#[then("the session is already finished")]
fn already_finished(context: &SwipeContext) {
    assert!(context.with_session(|session| session.is_finished()));
}

#[then("there is no recommendation")]
fn no_recommendation(context: &SwipeContext) {
    assert_eq!(context.outcome(), SwipeOutcome::NoRecommendation);
}

#[scenario(path = "tests/features/swipe_session.feature", index = 0)]
fn four_way_tie_goes_to_first_category(context: SwipeContext) {
    let _ = context;
}

#[scenario(path = "tests/features/swipe_session.feature", index = 1)]
fn passing_everything_still_matches(context: SwipeContext) {
    let _ = context;
}

#[scenario(path = "tests/features/swipe_session.feature", index = 2)]
fn extra_swipe_is_rejected(context: SwipeContext) {
    let _ = context;
}

#[scenario(path = "tests/features/swipe_session.feature", index = 3)]
fn empty_catalogue_has_no_recommendation(context: SwipeContext) {
    let _ = context;
}
