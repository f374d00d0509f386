//! Rounding and ordering shared by both ranking methods.
//!
//! Scores are rounded to [`SCORE_DECIMALS`] places before they are sorted,
//! so locations whose scores only differ beyond the fourth decimal tie and
//! keep their input order.

use std::cmp::Ordering;

/// Decimal places kept in published scores.
pub const SCORE_DECIMALS: usize = 4;

/// A ranked entry exposing the score it is ordered by.
pub trait Scored {
    /// Score used for ordering.
    fn score(&self) -> f64;
}

/// Round a score to four decimal places.
///
/// Rounding is decided on the exact binary value, so only values that sit
/// exactly halfway between two candidates round to even; `0.123_45` is
/// stored slightly above the midpoint and rounds up. Non-finite values pass
/// through unchanged and negative zero collapses to positive zero.
///
/// # Examples
/// ```
/// use sitewise_scorer::round_score;
///
/// assert_eq!(round_score(2.0 / 3.0), 0.6667);
/// assert_eq!(round_score(0.123_45), 0.1235);
/// assert_eq!(round_score(0.031_25), 0.0312);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "adding positive zero normalises the sign of zero"
)]
pub fn round_score(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // The formatter rounds the exact decimal expansion, ties to even.
    format!("{value:.prec$}", prec = SCORE_DECIMALS)
        .parse::<f64>()
        .map_or(value, |rounded| rounded + 0.0)
}

/// Sort entries by descending score, keeping input order among ties.
///
/// `NaN` sorts last; callers sanitise scores before ranking so it only
/// guards the comparator's total order.
pub fn sort_descending<T: Scored>(entries: &mut [T]) {
    entries.sort_by(|left, right| compare_descending(left.score(), right.score()));
}

fn compare_descending(left: f64, right: f64) -> Ordering {
    ordering_key(right).total_cmp(&ordering_key(left))
}

fn ordering_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else if score == 0.0 {
        0.0
    } else {
        score
    }
}
