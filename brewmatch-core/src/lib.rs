//! Core domain types for the Brewmatch recommendation toolkit.
//!
//! The crate models the drink catalogue, weather classification, the time
//! of day used to frame a recommendation, the request/response contract for
//! an external recommendation collaborator and the layered drink
//! customizer. Constructors return `Result` where input can be invalid so
//! callers see problems early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod customizer;
pub mod daypart;
pub mod recommend;
pub mod weather;

pub use catalog::{Catalog, CatalogError, Category, Drink, DrinkId};
pub use customizer::{
    Customization, CustomizeError, Direction, Language, Layer, LayerOption, ParseLanguageError,
};
pub use daypart::{ParseTimeOfDayError, TimeOfDay};
pub use recommend::{
    FallbackRecommender, Recommendation, RecommendError, RecommendationRequest, Recommender,
    RequestValidationError, recommend_for_snapshot, recommend_or_fallback,
};
pub use weather::{Condition, WeatherSnapshot, classify};
