//! Candidate locations and their recorded criterion values.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a [`Location`].
pub type LocationId = u64;

/// A candidate site ranked by the engine.
///
/// Only [`criteria_values`](Self::criteria_values) feeds the scoring maths;
/// the remaining fields are descriptive. The value map need not be total: a
/// criterion without an entry is scored as raw value `0.0`.
///
/// # Examples
/// ```
/// use sitewise_core::Location;
///
/// let location = Location::new(7, "Riverside")
///     .with_address("12 Quay Street")
///     .with_position(51.45, -2.59)
///     .with_value("footfall", 820.0);
///
/// assert_eq!(location.value("footfall"), Some(820.0));
/// assert_eq!(location.value("rent"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name, echoed in ranking output.
    pub name: String,
    /// Postal address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// WGS84 latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: f64,
    /// Raw values keyed by criterion identifier.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "criteria", alias = "criteriaValues", default)
    )]
    pub criteria_values: BTreeMap<String, f64>,
}

impl Location {
    /// Construct a location with no address, a null-island position, and no
    /// recorded values.
    #[must_use]
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            criteria_values: BTreeMap::new(),
        }
    }

    /// Set the postal address while consuming `self`.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the position while consuming `self`.
    #[must_use]
    pub const fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Record a raw value for a criterion while consuming `self`.
    #[must_use]
    pub fn with_value(mut self, criterion_id: impl Into<String>, value: f64) -> Self {
        self.criteria_values.insert(criterion_id.into(), value);
        self
    }

    /// Return the stored raw value for `criterion_id`, if any.
    #[must_use]
    pub fn value(&self, criterion_id: &str) -> Option<f64> {
        self.criteria_values.get(criterion_id).copied()
    }
}
