//! Validated dataset snapshots and the raw records they are built from.
//!
//! Loaders deliver [`DatasetRecord`]s whose criterion types are free-form
//! strings. Converting a record into a [`Dataset`] is the single point where
//! structural problems surface as a typed [`DatasetError`]; once built, a
//! dataset can be scored without further checks.

use std::collections::HashSet;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Criterion, CriterionKind, Location, LocationId};

/// Errors raised while validating a dataset snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DatasetError {
    /// A criterion declared a type other than `benefit` or `cost`.
    #[error("criterion '{id}' has invalid type '{kind}' (expected 'benefit' or 'cost')")]
    InvalidCriterionType {
        /// Identifier of the offending criterion.
        id: String,
        /// The rejected type string.
        kind: String,
    },
    /// Two criteria share an identifier.
    #[error("criterion id '{id}' appears more than once")]
    DuplicateCriterion {
        /// Repeated identifier.
        id: String,
    },
    /// Two locations share an identifier.
    #[error("location id {id} appears more than once")]
    DuplicateLocation {
        /// Repeated identifier.
        id: LocationId,
    },
    /// A criterion weight was NaN or infinite.
    #[error("criterion '{id}' has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Identifier of the offending criterion.
        id: String,
        /// The rejected weight.
        weight: f64,
    },
    /// A stored value was NaN or infinite.
    #[error("location {location} has non-finite value {value} for criterion '{criterion}'")]
    NonFiniteValue {
        /// Identifier of the offending location.
        location: LocationId,
        /// Criterion the value was recorded against.
        criterion: String,
        /// The rejected value.
        value: f64,
    },
}

/// A criterion as delivered by a loader, before its type is checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CriterionRecord {
    /// Identifier referenced by location values.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Importance weight.
    pub weight: f64,
    /// Type string; must be `benefit` or `cost`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl From<Criterion> for CriterionRecord {
    fn from(criterion: Criterion) -> Self {
        Self {
            id: criterion.id,
            name: criterion.name,
            weight: criterion.weight,
            kind: criterion.kind.as_str().to_owned(),
        }
    }
}

impl TryFrom<CriterionRecord> for Criterion {
    type Error = DatasetError;

    fn try_from(record: CriterionRecord) -> Result<Self, Self::Error> {
        let Ok(kind) = record.kind.parse::<CriterionKind>() else {
            return Err(DatasetError::InvalidCriterionType {
                id: record.id,
                kind: record.kind,
            });
        };
        Ok(Self {
            id: record.id,
            name: record.name,
            weight: record.weight,
            kind,
        })
    }
}

/// Unvalidated snapshot as read from a collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatasetRecord {
    /// Candidate locations in their stored order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locations: Vec<Location>,
    /// Criteria in their stored order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub criteria: Vec<CriterionRecord>,
}

impl From<Dataset> for DatasetRecord {
    fn from(dataset: Dataset) -> Self {
        let (locations, criteria) = dataset.into_parts();
        Self {
            locations,
            criteria: criteria.into_iter().map(CriterionRecord::from).collect(),
        }
    }
}

/// Immutable, validated snapshot of locations and criteria.
///
/// Input order is preserved; it decides the relative order of equally
/// scored locations in rankings.
///
/// # Examples
/// ```
/// use sitewise_core::{CriterionRecord, Dataset, DatasetError, DatasetRecord, Location};
///
/// let record = DatasetRecord {
///     locations: vec![Location::new(1, "A")],
///     criteria: vec![CriterionRecord {
///         id: "rent".into(),
///         name: "Rent".into(),
///         weight: 1.0,
///         kind: "expense".into(),
///     }],
/// };
///
/// let err = Dataset::try_from(record).unwrap_err();
/// assert!(matches!(err, DatasetError::InvalidCriterionType { .. }));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    locations: Vec<Location>,
    criteria: Vec<Criterion>,
}

impl Dataset {
    /// Validate and construct a snapshot.
    ///
    /// Negative weights and values recorded against unknown criteria are
    /// accepted but logged, since scoring tolerates both.
    ///
    /// # Errors
    /// Returns [`DatasetError`] for duplicate identifiers or non-finite
    /// weights and values.
    pub fn new(locations: Vec<Location>, criteria: Vec<Criterion>) -> Result<Self, DatasetError> {
        validate_criteria(&criteria)?;
        validate_locations(&locations, &criteria)?;
        Ok(Self {
            locations,
            criteria,
        })
    }

    /// An empty snapshot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            locations: Vec::new(),
            criteria: Vec::new(),
        }
    }

    /// Locations in input order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Criteria in input order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Report whether either side of the snapshot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty() || self.criteria.is_empty()
    }

    /// Consume the snapshot and return its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Location>, Vec<Criterion>) {
        (self.locations, self.criteria)
    }
}

impl TryFrom<DatasetRecord> for Dataset {
    type Error = DatasetError;

    fn try_from(record: DatasetRecord) -> Result<Self, Self::Error> {
        let criteria = record
            .criteria
            .into_iter()
            .map(Criterion::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(record.locations, criteria)
    }
}

fn validate_criteria(criteria: &[Criterion]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(criteria.len());
    for criterion in criteria {
        if !seen.insert(criterion.id.as_str()) {
            return Err(DatasetError::DuplicateCriterion {
                id: criterion.id.clone(),
            });
        }
        if !criterion.weight.is_finite() {
            return Err(DatasetError::NonFiniteWeight {
                id: criterion.id.clone(),
                weight: criterion.weight,
            });
        }
        if criterion.weight < 0.0 {
            warn!(
                "criterion '{}' has negative weight {}; scores may be inverted",
                criterion.id, criterion.weight
            );
        }
    }
    Ok(())
}

fn validate_locations(locations: &[Location], criteria: &[Criterion]) -> Result<(), DatasetError> {
    let known: HashSet<&str> = criteria.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::with_capacity(locations.len());
    for location in locations {
        if !seen.insert(location.id) {
            return Err(DatasetError::DuplicateLocation { id: location.id });
        }
        for (criterion, value) in &location.criteria_values {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteValue {
                    location: location.id,
                    criterion: criterion.clone(),
                    value: *value,
                });
            }
            if !known.contains(criterion.as_str()) {
                warn!(
                    "location {} records a value for unknown criterion '{criterion}'; ignoring it",
                    location.id
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn record(kind: &str) -> CriterionRecord {
        CriterionRecord {
            id: "rent".to_owned(),
            name: "Rent".to_owned(),
            weight: 1.0,
            kind: kind.to_owned(),
        }
    }

    #[fixture]
    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("rent", "Rent", 0.5, CriterionKind::Cost),
            Criterion::new("footfall", "Footfall", 0.5, CriterionKind::Benefit),
        ]
    }

    #[rstest]
    #[case("benefit", CriterionKind::Benefit)]
    #[case("cost", CriterionKind::Cost)]
    fn converts_known_types(#[case] kind: &str, #[case] expected: CriterionKind) {
        let criterion = Criterion::try_from(record(kind)).expect("known type converts");
        assert_eq!(criterion.kind, expected);
    }

    #[rstest]
    #[case("profit")]
    #[case("COST")]
    fn rejects_unknown_types(#[case] kind: &str) {
        let dataset = Dataset::try_from(DatasetRecord {
            locations: Vec::new(),
            criteria: vec![record(kind)],
        });
        assert_eq!(
            dataset,
            Err(DatasetError::InvalidCriterionType {
                id: "rent".to_owned(),
                kind: kind.to_owned(),
            })
        );
    }

    #[rstest]
    fn rejects_duplicate_criteria(mut criteria: Vec<Criterion>) {
        criteria.push(Criterion::new("rent", "Rent again", 1.0, CriterionKind::Cost));
        let err = Dataset::new(Vec::new(), criteria).expect_err("duplicate should fail");
        assert_eq!(
            err,
            DatasetError::DuplicateCriterion {
                id: "rent".to_owned()
            }
        );
    }

    #[rstest]
    fn rejects_duplicate_locations(criteria: Vec<Criterion>) {
        let locations = vec![Location::new(4, "A"), Location::new(4, "B")];
        let err = Dataset::new(locations, criteria).expect_err("duplicate should fail");
        assert_eq!(err, DatasetError::DuplicateLocation { id: 4 });
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_weights(#[case] weight: f64) {
        let criteria = vec![Criterion::new("rent", "Rent", weight, CriterionKind::Cost)];
        let err = Dataset::new(Vec::new(), criteria).expect_err("weight should fail");
        assert!(matches!(err, DatasetError::NonFiniteWeight { .. }));
    }

    #[rstest]
    fn rejects_non_finite_values(criteria: Vec<Criterion>) {
        let locations = vec![Location::new(1, "A").with_value("rent", f64::NEG_INFINITY)];
        let err = Dataset::new(locations, criteria).expect_err("value should fail");
        assert!(matches!(
            err,
            DatasetError::NonFiniteValue { location: 1, .. }
        ));
    }

    #[rstest]
    fn accepts_negative_weights_and_dangling_values() {
        let criteria = vec![Criterion::new("rent", "Rent", -1.0, CriterionKind::Cost)];
        let locations = vec![Location::new(1, "A").with_value("retired", 3.0)];
        let dataset = Dataset::new(locations, criteria).expect("tolerated input");
        assert_eq!(dataset.locations().len(), 1);
        assert!(!dataset.is_empty());
    }

    #[rstest]
    fn preserves_input_order(criteria: Vec<Criterion>) {
        let locations = vec![Location::new(9, "Z"), Location::new(1, "A")];
        let dataset = Dataset::new(locations, criteria).expect("valid dataset");
        let ids: Vec<_> = dataset.locations().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![9, 1]);
        assert_eq!(dataset.criteria().first().map(|c| c.id.as_str()), Some("rent"));
    }

    #[rstest]
    fn empty_snapshot_is_empty() {
        assert!(Dataset::empty().is_empty());
        assert_eq!(Dataset::empty(), Dataset::default());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn record_round_trips_through_dataset(criteria: Vec<Criterion>) {
        let dataset = Dataset::new(vec![Location::new(1, "A")], criteria).expect("valid dataset");
        let record = DatasetRecord::from(dataset.clone());
        let json = serde_json::to_string(&record).expect("serialise record");
        let decoded: DatasetRecord = serde_json::from_str(&json).expect("decode record");
        assert_eq!(Dataset::try_from(decoded), Ok(dataset));
    }
}
