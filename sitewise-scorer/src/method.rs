//! Method selection and dispatch over dataset snapshots.

use serde::{Deserialize, Serialize};
use sitewise_core::{Dataset, DatasetSource};
use thiserror::Error;

use crate::{SawResult, WpResult, compute_saw, compute_wp};

/// Ranking algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Simple Additive Weighting.
    #[default]
    Saw,
    /// Weighted Product.
    Wp,
}

impl Method {
    /// Return the method's lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saw => "saw",
            Self::Wp => "wp",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ranking method '{value}' (expected 'saw' or 'wp')")]
pub struct ParseMethodError {
    /// The rejected input.
    pub value: String,
}

impl std::str::FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saw" => Ok(Self::Saw),
            "wp" => Ok(Self::Wp),
            _ => Err(ParseMethodError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Ordered results of either method.
///
/// Serialises as the bare result list so callers see the same shape whether
/// they invoked a method directly or through [`rank`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ranking {
    /// Simple Additive Weighting results.
    Saw(Vec<SawResult>),
    /// Weighted Product results.
    Wp(Vec<WpResult>),
}

impl Ranking {
    /// Method that produced the ranking.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Saw(_) => Method::Saw,
            Self::Wp(_) => Method::Wp,
        }
    }

    /// Number of ranked locations.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Saw(results) => results.len(),
            Self::Wp(results) => results.len(),
        }
    }

    /// Report whether nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Location names and scores in rank order.
    #[must_use]
    pub fn standings(&self) -> Vec<(&str, f64)> {
        match self {
            Self::Saw(results) => results
                .iter()
                .map(|r| (r.location.as_str(), r.score))
                .collect(),
            Self::Wp(results) => results
                .iter()
                .map(|r| (r.location.as_str(), r.score))
                .collect(),
        }
    }
}

/// Rank a validated snapshot with the chosen method.
///
/// # Examples
/// ```
/// use sitewise_core::{Criterion, CriterionKind, Dataset, Location};
/// use sitewise_scorer::{Method, rank};
///
/// # fn main() -> Result<(), sitewise_core::DatasetError> {
/// let dataset = Dataset::new(
///     vec![
///         Location::new(1, "A").with_value("rent", 10.0),
///         Location::new(2, "B").with_value("rent", 5.0),
///     ],
///     vec![Criterion::new("rent", "Rent", 1.0, CriterionKind::Cost)],
/// )?;
///
/// let ranking = rank(&dataset, Method::Saw);
/// assert_eq!(ranking.standings(), vec![("B", 1.0), ("A", 0.5)]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank(dataset: &Dataset, method: Method) -> Ranking {
    match method {
        Method::Saw => Ranking::Saw(compute_saw(dataset.locations(), dataset.criteria())),
        Method::Wp => Ranking::Wp(compute_wp(dataset.locations(), dataset.criteria())),
    }
}

/// Take a snapshot from `source` and rank it.
///
/// # Errors
/// Propagates the source's error when no snapshot can be produced.
pub fn rank_from<S>(source: &S, method: Method) -> Result<Ranking, S::Error>
where
    S: DatasetSource + ?Sized,
{
    let dataset = source.snapshot()?;
    log::debug!(
        "ranking {} locations against {} criteria with {method}",
        dataset.locations().len(),
        dataset.criteria().len()
    );
    Ok(rank(&dataset, method))
}
