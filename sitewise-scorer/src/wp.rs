//! Weighted Product.
//!
//! Each location's raw values are raised to their criterion weight, negated
//! for cost criteria, and multiplied together. The products are then
//! normalised by their sum so the published scores share a common scale.
//!
//! Two approximations keep the computation total:
//! - a raw value of exactly `0.0` is skipped, acting as a neutral factor
//!   instead of an undefined or infinite power;
//! - a power that is not finite (a negative base under a fractional
//!   exponent, or overflow) zeroes the location's product.

use log::warn;
use serde::{Deserialize, Serialize};
use sitewise_core::{Criterion, CriterionKind, Location, LocationId, ValueMatrix};

use crate::ranking::{Scored, round_score, sort_descending};

/// One location's WP outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WpResult {
    /// Location name.
    pub location: String,
    /// Share of the summed products, rounded to four decimals.
    pub score: f64,
    /// Unnormalised weighted product.
    pub s: f64,
}

impl Scored for WpResult {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Rank locations by Weighted Product.
///
/// Scores are each location's product divided by the sum of all products,
/// or `0.0` for everyone when that sum is not positive. Ordering matches
/// [`compute_saw`](crate::compute_saw). Empty `locations` or `criteria`
/// yield an empty ranking.
///
/// # Examples
/// ```
/// use sitewise_core::{Criterion, CriterionKind, Location};
/// use sitewise_scorer::compute_wp;
///
/// let criteria = [Criterion::new("footfall", "Footfall", 1.0, CriterionKind::Benefit)];
/// let locations = [
///     Location::new(1, "A").with_value("footfall", 10.0),
///     Location::new(2, "B").with_value("footfall", 5.0),
/// ];
///
/// let ranking = compute_wp(&locations, &criteria);
/// assert_eq!(ranking[0].score, 0.6667);
/// assert_eq!(ranking[0].s, 10.0);
/// assert_eq!(ranking[1].score, 0.3333);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "WP sums the per-location products"
)]
pub fn compute_wp(locations: &[Location], criteria: &[Criterion]) -> Vec<WpResult> {
    if locations.is_empty() || criteria.is_empty() {
        return Vec::new();
    }

    let matrix = ValueMatrix::build(locations, criteria);
    let products: Vec<f64> = locations
        .iter()
        .enumerate()
        .map(|(row, location)| weighted_product(location.id, matrix.row(row), criteria))
        .collect();
    let total = products.iter().fold(0.0_f64, |sum, s| sum + s);

    let mut results: Vec<WpResult> = locations
        .iter()
        .zip(products)
        .map(|(location, s)| WpResult {
            location: location.name.clone(),
            score: relative_score(s, total),
            s,
        })
        .collect();
    sort_descending(&mut results);
    results
}

#[expect(
    clippy::float_arithmetic,
    reason = "cost criteria contribute with a negated exponent"
)]
fn signed_weight(criterion: &Criterion) -> f64 {
    match criterion.kind {
        CriterionKind::Benefit => criterion.weight,
        CriterionKind::Cost => -criterion.weight,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "WP multiplies powered criterion values"
)]
pub(crate) fn weighted_product(location: LocationId, row: &[f64], criteria: &[Criterion]) -> f64 {
    let mut product = 1.0_f64;
    for (criterion, &value) in criteria.iter().zip(row) {
        if value == 0.0 {
            continue;
        }
        let factor = value.powf(signed_weight(criterion));
        if !factor.is_finite() {
            warn!(
                "location {location}: {value} ^ {} for criterion '{}' is not finite; \
                 treating the factor as 0",
                signed_weight(criterion),
                criterion.id
            );
            return 0.0;
        }
        product *= factor;
    }

    if product.is_finite() {
        product
    } else {
        warn!("location {location}: weighted product overflowed; treating it as 0");
        0.0
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "WP scores are shares of the summed products"
)]
fn relative_score(s: f64, total: f64) -> f64 {
    if total > 0.0 {
        round_score(s / total)
    } else {
        0.0
    }
}
