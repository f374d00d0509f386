//! Multi-criteria ranking of candidate locations.
//!
//! Two methods are provided:
//! - **Simple Additive Weighting** ([`compute_saw`]) normalises every
//!   criterion column against its extremes, benefit criteria relative to the
//!   maximum and cost criteria relative to the minimum, and sums the weighted
//!   normalised values.
//! - **Weighted Product** ([`compute_wp`]) multiplies raw values raised to
//!   their (cost-negated) weights and reports each location's share of the
//!   summed products.
//!
//! Both are pure functions of the supplied locations and criteria. Scores
//! are rounded to four decimals before ranking, and ranking is a stable
//! descending sort, so equal scores keep input order. Weights are used as
//! given; they are never rescaled to sum to one.
//!
//! # Examples
//!
//! ```
//! use sitewise_core::{Criterion, CriterionKind, Location};
//! use sitewise_scorer::compute_saw;
//!
//! let criteria = [Criterion::new("rent", "Rent", 1.0, CriterionKind::Cost)];
//! let locations = [
//!     Location::new(1, "A").with_value("rent", 10.0),
//!     Location::new(2, "B").with_value("rent", 5.0),
//! ];
//!
//! let ranking = compute_saw(&locations, &criteria);
//! assert_eq!(ranking[0].location, "B");
//! assert_eq!(ranking[1].score, 0.5);
//! ```

#![forbid(unsafe_code)]

mod method;
mod ranking;
mod saw;
mod wp;

pub use method::{Method, ParseMethodError, Ranking, rank, rank_from};
pub use ranking::{SCORE_DECIMALS, Scored, round_score, sort_descending};
pub use saw::{SawResult, compute_saw};
pub use wp::{WpResult, compute_wp};
