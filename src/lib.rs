//! Facade crate for the Brewmatch recommendation core.
//!
//! Re-exports the weather classifier, catalogue, recommendation contract
//! and customizer from `brewmatch-core` together with the swipe scorer from
//! `brewmatch-scorer`, so hosts depend on a single crate.
//!
//! # Examples
//! ```
//! use brewmatch::{Catalog, Decision, SwipeSession, classify};
//!
//! assert_eq!(classify(3).label(), "Overcast");
//!
//! let catalog = Catalog::demo();
//! let mut session = SwipeSession::new(&catalog);
//! session.run([Decision::Like; 7]).unwrap();
//! assert_eq!(session.result().unwrap().category().map(|c| c.as_str()), Some("coffee"));
//! ```

#![forbid(unsafe_code)]

pub use brewmatch_core::{
    Catalog, CatalogError, Category, Condition, Customization, CustomizeError, Direction, Drink,
    DrinkId, FallbackRecommender, Language, Layer, LayerOption, Recommendation, RecommendError,
    RecommendationRequest, Recommender, RequestValidationError, TimeOfDay, WeatherSnapshot,
    classify, recommend_for_snapshot, recommend_or_fallback,
};

pub use brewmatch_scorer::{
    Decision, LIKE_WEIGHT, PASS_WEIGHT, PreferenceScores, SessionState, SwipeError, SwipeOutcome,
    SwipeSession,
};
