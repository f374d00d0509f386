//! Core domain types for the Sitewise ranking engine.
//!
//! A ranking run operates on an immutable [`Dataset`] snapshot made of
//! candidate [`Location`]s and weighted [`Criterion`] definitions. Snapshots
//! are produced by a [`DatasetSource`]; constructing a [`Dataset`] validates
//! the raw records so downstream scoring can assume well-typed input.
//!
//! The [`ValueMatrix`] materialises the `location × criterion` grid of raw
//! values that both ranking methods consume, substituting `0.0` for values a
//! location does not record.
//!
//! # Examples
//!
//! ```
//! use sitewise_core::{Criterion, CriterionKind, Dataset, Location, ValueMatrix};
//!
//! # fn main() -> Result<(), sitewise_core::DatasetError> {
//! let criteria = vec![Criterion::new("rent", "Monthly rent", 1.0, CriterionKind::Cost)];
//! let locations = vec![
//!     Location::new(1, "Harbour").with_value("rent", 1_200.0),
//!     Location::new(2, "Old town"),
//! ];
//! let dataset = Dataset::new(locations, criteria)?;
//! let matrix = ValueMatrix::build(dataset.locations(), dataset.criteria());
//! assert_eq!(matrix.value(1, 0), 0.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod criterion;
pub mod dataset;
pub mod location;
pub mod matrix;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use criterion::{Criterion, CriterionKind, ParseCriterionKindError};
pub use dataset::{CriterionRecord, Dataset, DatasetError, DatasetRecord};
pub use location::{Location, LocationId};
pub use matrix::{ColumnBounds, ValueMatrix};
pub use source::DatasetSource;
