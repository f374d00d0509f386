//! Facade crate for the Sitewise location-ranking engine.
//!
//! This crate re-exports the core domain types and ranking methods, and
//! exposes the dataset loaders behind feature flags.
//!
//! # Examples
//!
//! ```
//! use sitewise_engine::{Criterion, CriterionKind, Dataset, Location, Method, rank};
//!
//! let dataset = Dataset::new(
//!     vec![
//!         Location::new(1, "Harbour").with_value("footfall", 120.0),
//!         Location::new(2, "Market").with_value("footfall", 300.0),
//!     ],
//!     vec![Criterion::new("footfall", "Footfall", 1.0, CriterionKind::Benefit)],
//! )
//! .expect("valid dataset");
//!
//! let ranking = rank(&dataset, Method::Saw);
//! assert_eq!(ranking.standings().first(), Some(&("Market", 1.0)));
//! ```

#![forbid(unsafe_code)]

pub use sitewise_core::{
    ColumnBounds, Criterion, CriterionKind, CriterionRecord, Dataset, DatasetError, DatasetRecord,
    DatasetSource, Location, LocationId, ParseCriterionKindError, ValueMatrix,
};
pub use sitewise_scorer::{
    Method, ParseMethodError, Ranking, SawResult, WpResult, compute_saw, compute_wp, rank,
    rank_from,
};

#[cfg(feature = "test-support")]
pub use sitewise_core::test_support;

#[cfg(feature = "loaders")]
pub use sitewise_data::{DatasetLoadError, JsonDatasetSource};

#[cfg(feature = "store-sqlite")]
pub use sitewise_data::SqliteDatasetSource;
