//! Weighted criteria and the direction of preference they express.
//!
//! # Examples
//! ```
//! use sitewise_core::CriterionKind;
//!
//! assert_eq!(CriterionKind::Benefit.as_str(), "benefit");
//! assert_eq!("cost".parse::<CriterionKind>(), Ok(CriterionKind::Cost));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CriterionKind {
    /// Higher raw values are preferable.
    Benefit,
    /// Lower raw values are preferable.
    Cost,
}

impl CriterionKind {
    /// Return the kind as its lowercase wire name.
    ///
    /// # Examples
    /// ```
    /// use sitewise_core::CriterionKind;
    ///
    /// assert_eq!(CriterionKind::Cost.as_str(), "cost");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Benefit => "benefit",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a criterion type is neither `benefit` nor `cost`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown criterion type '{value}' (expected 'benefit' or 'cost')")]
pub struct ParseCriterionKindError {
    /// The rejected input.
    pub value: String,
}

impl std::str::FromStr for CriterionKind {
    type Err = ParseCriterionKindError;

    /// Parse the exact wire names. Matching is case-sensitive so stored
    /// values such as `"Benefit"` are reported rather than reinterpreted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "benefit" => Ok(Self::Benefit),
            "cost" => Ok(Self::Cost),
            _ => Err(ParseCriterionKindError {
                value: s.to_owned(),
            }),
        }
    }
}

/// A weighted criterion used to compare locations.
///
/// Weights are taken as supplied: they need not sum to one and are never
/// rescaled by the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Criterion {
    /// Identifier referenced by [`Location`](crate::Location) values.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Non-negative importance of the criterion.
    pub weight: f64,
    /// Direction of preference.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: CriterionKind,
}

impl Criterion {
    /// Construct a criterion.
    ///
    /// # Examples
    /// ```
    /// use sitewise_core::{Criterion, CriterionKind};
    ///
    /// let criterion = Criterion::new("footfall", "Daily footfall", 0.4, CriterionKind::Benefit);
    /// assert_eq!(criterion.id, "footfall");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
        kind: CriterionKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            kind,
        }
    }

    /// Report whether higher raw values are preferable.
    #[must_use]
    pub const fn is_benefit(&self) -> bool {
        matches!(self.kind, CriterionKind::Benefit)
    }
}
