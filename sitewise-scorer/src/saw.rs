//! Simple Additive Weighting.
//!
//! Each criterion column is normalised against its extremes over the whole
//! location set: benefit values divide by the column maximum and cost values
//! divide into the column minimum. A location's score is the weighted sum of
//! its normalised values.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sitewise_core::{ColumnBounds, Criterion, CriterionKind, Location, ValueMatrix};

use crate::ranking::{Scored, round_score, sort_descending};

/// One location's SAW outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SawResult {
    /// Location name.
    pub location: String,
    /// Weighted sum rounded to four decimals.
    pub score: f64,
    /// Normalised value per scored criterion identifier.
    pub details: BTreeMap<String, f64>,
}

impl Scored for SawResult {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Direction-aware normaliser for one criterion column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColumnNormaliser {
    kind: CriterionKind,
    bounds: ColumnBounds,
}

impl ColumnNormaliser {
    pub(crate) const fn new(kind: CriterionKind, bounds: ColumnBounds) -> Self {
        Self { kind, bounds }
    }

    /// Map a raw value onto the column's comparable scale.
    ///
    /// Degenerate columns (no positive maximum for benefit, no positive
    /// minimum for cost) and zero cost values normalise to `0.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides by the column extremes"
    )]
    pub(crate) fn apply(self, value: f64) -> f64 {
        match self.kind {
            CriterionKind::Benefit if self.bounds.max > 0.0 => value / self.bounds.max,
            CriterionKind::Cost if self.bounds.min > 0.0 && value > 0.0 => self.bounds.min / value,
            CriterionKind::Benefit | CriterionKind::Cost => 0.0,
        }
    }
}

/// Rank locations by Simple Additive Weighting.
///
/// Missing values count as `0.0`. Criteria that no location records a value
/// for are left out of every score and every `details` map. Results are
/// ordered by descending rounded score; equal scores keep input order.
/// Empty `locations` or `criteria` yield an empty ranking.
///
/// # Examples
/// ```
/// use sitewise_core::{Criterion, CriterionKind, Location};
/// use sitewise_scorer::compute_saw;
///
/// let criteria = [Criterion::new("footfall", "Footfall", 1.0, CriterionKind::Benefit)];
/// let locations = [
///     Location::new(1, "A").with_value("footfall", 10.0),
///     Location::new(2, "B").with_value("footfall", 5.0),
/// ];
///
/// let ranking = compute_saw(&locations, &criteria);
/// assert_eq!(ranking[0].location, "A");
/// assert_eq!(ranking[0].score, 1.0);
/// assert_eq!(ranking[1].score, 0.5);
/// ```
#[must_use]
pub fn compute_saw(locations: &[Location], criteria: &[Criterion]) -> Vec<SawResult> {
    if locations.is_empty() || criteria.is_empty() {
        return Vec::new();
    }

    let matrix = ValueMatrix::build(locations, criteria);
    let normalisers = column_normalisers(&matrix, criteria);

    let mut results: Vec<SawResult> = locations
        .iter()
        .enumerate()
        .map(|(row, location)| score_location(location, matrix.row(row), criteria, &normalisers))
        .collect();
    sort_descending(&mut results);
    results
}

fn column_normalisers(matrix: &ValueMatrix, criteria: &[Criterion]) -> Vec<Option<ColumnNormaliser>> {
    criteria
        .iter()
        .enumerate()
        .map(|(column, criterion)| {
            if !matrix.is_observed(column) {
                debug!(
                    "criterion '{}' has no recorded values; excluding it from SAW scores",
                    criterion.id
                );
                return None;
            }
            matrix
                .column_bounds(column)
                .map(|bounds| ColumnNormaliser::new(criterion.kind, bounds))
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "SAW accumulates a weighted sum of normalised values"
)]
fn score_location(
    location: &Location,
    row: &[f64],
    criteria: &[Criterion],
    normalisers: &[Option<ColumnNormaliser>],
) -> SawResult {
    let mut details = BTreeMap::new();
    let mut total = 0.0_f64;
    for ((criterion, normaliser), value) in criteria.iter().zip(normalisers).zip(row) {
        let Some(normaliser) = normaliser else {
            continue;
        };
        let normalised = normaliser.apply(*value);
        total += criterion.weight * normalised;
        details.insert(criterion.id.clone(), normalised);
    }

    if !total.is_finite() {
        warn!(
            "SAW score for location {} is not finite ({total}); scoring it as 0",
            location.id
        );
        total = 0.0;
    }

    SawResult {
        location: location.name.clone(),
        score: round_score(total),
        details,
    }
}
