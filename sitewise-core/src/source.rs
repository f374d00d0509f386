//! Read-only access to dataset snapshots.
//!
//! The `DatasetSource` trait is the contract between the ranking engine and
//! whatever stores locations and criteria. The engine only ever asks for a
//! complete, consistent snapshot; how it was stored or transported is the
//! source's concern.

use crate::Dataset;

/// Supplies immutable dataset snapshots.
///
/// Each call must return a view that stays consistent for the duration of
/// one ranking computation. Sources that share storage with concurrent
/// writers are responsible for copying or isolating the data they return.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use sitewise_core::{Criterion, CriterionKind, Dataset, DatasetSource, Location};
///
/// struct Fixed(Dataset);
///
/// impl DatasetSource for Fixed {
///     type Error = Infallible;
///
///     fn snapshot(&self) -> Result<Dataset, Self::Error> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let dataset = Dataset::new(
///     vec![Location::new(1, "A")],
///     vec![Criterion::new("rent", "Rent", 1.0, CriterionKind::Cost)],
/// )
/// .unwrap();
/// let source = Fixed(dataset.clone());
/// assert_eq!(source.snapshot(), Ok(dataset));
/// ```
pub trait DatasetSource {
    /// Error raised when a snapshot cannot be produced.
    type Error: std::error::Error;

    /// Return the current snapshot.
    ///
    /// # Errors
    /// Implementations report storage, decoding, or validation failures.
    fn snapshot(&self) -> Result<Dataset, Self::Error>;
}
