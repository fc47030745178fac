//! Swipe-based taste preference scoring for Brewmatch.
//!
//! A [`SwipeSession`] walks a [`Catalog`](brewmatch_core::Catalog) in order
//! and accepts one like/pass [`Decision`] per drink. Each like adds `1.0`
//! to the drink's category and each pass subtracts `0.5`. Once every drink
//! has been decided the session is finished and [`SwipeSession::result`]
//! reports the top-scoring category together with the first catalogue drink
//! in that category.
//!
//! Ties go to the category that was scored first, and negative totals can
//! still win: the ranking is relative, not thresholded.
//!
//! # Examples
//!
//! ```
//! use brewmatch_core::{Catalog, DrinkId};
//! use brewmatch_scorer::{Decision, SwipeOutcome, SwipeSession};
//!
//! # fn main() -> Result<(), brewmatch_scorer::SwipeError> {
//! let catalog = Catalog::demo();
//! let mut session = SwipeSession::new(&catalog);
//! session.run([
//!     Decision::Pass,
//!     Decision::Like,
//!     Decision::Pass,
//!     Decision::Pass,
//!     Decision::Pass,
//!     Decision::Pass,
//!     Decision::Pass,
//! ])?;
//!
//! let outcome = session.result()?;
//! assert_eq!(outcome.category().map(|c| c.as_str()), Some("espresso"));
//! assert_eq!(outcome.drink_id(), Some(DrinkId(2)));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod session;
mod types;

pub use error::{ParseDecisionError, SwipeError};
pub use session::{SessionState, SwipeSession};
pub use types::{Decision, LIKE_WEIGHT, PASS_WEIGHT, PreferenceScores, SwipeOutcome};
