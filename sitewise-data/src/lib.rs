//! Dataset loaders for the Sitewise ranking engine.
//!
//! Each loader implements [`DatasetSource`](sitewise_core::DatasetSource)
//! and returns a validated [`Dataset`](sitewise_core::Dataset) snapshot:
//! - [`JsonDatasetSource`] reads a `{"locations": [...], "criteria": [...]}`
//!   document from disk.
//! - [`SqliteDatasetSource`] (feature `store-sqlite`) reads the
//!   `locations`, `criteria`, and `location_criteria` tables of an existing
//!   database through a read-only connection.
//!
//! Loaders never write. Storage layout and record maintenance belong to
//! whichever application owns the data.
//!
//! # Examples
//!
//! ```no_run
//! use sitewise_core::DatasetSource;
//! use sitewise_data::JsonDatasetSource;
//!
//! let source = JsonDatasetSource::new("data/sites.json");
//! let dataset = source.snapshot().expect("load dataset");
//! println!("{} locations", dataset.locations().len());
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod fs;
mod json;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use error::DatasetLoadError;
pub use json::JsonDatasetSource;
#[cfg(feature = "store-sqlite")]
pub use sqlite::SqliteDatasetSource;
