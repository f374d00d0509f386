//! Read-only loader for the relational location store.
//!
//! The database holds three tables:
//!
//! ```sql
//! CREATE TABLE locations (id INTEGER PRIMARY KEY, name TEXT NOT NULL,
//!     address TEXT NOT NULL, latitude REAL NOT NULL, longitude REAL NOT NULL);
//! CREATE TABLE criteria (id TEXT PRIMARY KEY, name TEXT NOT NULL,
//!     weight REAL NOT NULL, type TEXT NOT NULL);
//! CREATE TABLE location_criteria (location_id INTEGER, criteria_id TEXT,
//!     value REAL NOT NULL, PRIMARY KEY (location_id, criteria_id));
//! ```
//!
//! Rows are read in rowid order so rankings break ties the same way on
//! every load. `locations.id` aliases the rowid, so locations come back in
//! id order; criteria and values come back in insertion order.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use rusqlite::{Connection, OpenFlags};
use sitewise_core::{CriterionRecord, Dataset, DatasetRecord, DatasetSource, Location, LocationId};

use crate::DatasetLoadError;

const LOCATIONS_SQL: &str =
    "SELECT id, name, address, latitude, longitude FROM locations ORDER BY rowid";
const CRITERIA_SQL: &str = "SELECT id, name, weight, type FROM criteria ORDER BY rowid";
const VALUES_SQL: &str =
    "SELECT location_id, criteria_id, value FROM location_criteria ORDER BY rowid";

/// Dataset source reading an existing `SQLite` database.
///
/// The connection is opened with `SQLITE_OPEN_READ_ONLY` for each snapshot
/// and closed afterwards; the loader never creates tables or writes rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteDatasetSource {
    path: Utf8PathBuf,
}

impl SqliteDatasetSource {
    /// Create a source reading from the database at `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read all three tables without validating the result.
    ///
    /// # Errors
    /// Returns [`DatasetLoadError`] when the database cannot be opened, a
    /// query fails, or a location id is negative.
    pub fn read_record(&self) -> Result<DatasetRecord, DatasetLoadError> {
        let connection =
            Connection::open_with_flags(self.path.as_std_path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
                .map_err(|source| DatasetLoadError::OpenDatabase {
                    path: self.path.clone(),
                    source,
                })?;

        let mut locations = load_locations(&connection, &self.path)?;
        let criteria = load_criteria(&connection, &self.path)?;
        attach_values(&connection, &self.path, &mut locations)?;
        Ok(DatasetRecord {
            locations,
            criteria,
        })
    }
}

impl DatasetSource for SqliteDatasetSource {
    type Error = DatasetLoadError;

    fn snapshot(&self) -> Result<Dataset, Self::Error> {
        let record = self.read_record()?;
        debug!(
            "read {} locations and {} criteria from {}",
            record.locations.len(),
            record.criteria.len(),
            self.path
        );
        Dataset::try_from(record).map_err(|source| DatasetLoadError::Invalid {
            path: self.path.clone(),
            source,
        })
    }
}

fn query_error(
    path: &Utf8Path,
    operation: &'static str,
) -> impl FnOnce(rusqlite::Error) -> DatasetLoadError {
    let path = path.to_path_buf();
    move |source| DatasetLoadError::Query {
        path,
        operation,
        source,
    }
}

fn location_id(raw: i64) -> Result<LocationId, DatasetLoadError> {
    LocationId::try_from(raw).map_err(|_| DatasetLoadError::LocationIdOutOfRange { id: raw })
}

fn load_locations(
    connection: &Connection,
    path: &Utf8Path,
) -> Result<Vec<Location>, DatasetLoadError> {
    let mut stmt = connection
        .prepare(LOCATIONS_SQL)
        .map_err(query_error(path, "prepare locations query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })
        .map_err(query_error(path, "query locations"))?;

    let mut locations = Vec::new();
    for row in rows {
        let (raw_id, name, address, latitude, longitude) =
            row.map_err(query_error(path, "read location row"))?;
        locations.push(
            Location::new(location_id(raw_id)?, name)
                .with_address(address)
                .with_position(latitude, longitude),
        );
    }
    Ok(locations)
}

fn load_criteria(
    connection: &Connection,
    path: &Utf8Path,
) -> Result<Vec<CriterionRecord>, DatasetLoadError> {
    let mut stmt = connection
        .prepare(CRITERIA_SQL)
        .map_err(query_error(path, "prepare criteria query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CriterionRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                weight: row.get(2)?,
                kind: row.get(3)?,
            })
        })
        .map_err(query_error(path, "query criteria"))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(query_error(path, "read criterion row"))
}

fn attach_values(
    connection: &Connection,
    path: &Utf8Path,
    locations: &mut [Location],
) -> Result<(), DatasetLoadError> {
    let positions: HashMap<LocationId, usize> = locations
        .iter()
        .enumerate()
        .map(|(position, location)| (location.id, position))
        .collect();

    let mut stmt = connection
        .prepare(VALUES_SQL)
        .map_err(query_error(path, "prepare location criteria query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
            ))
        })
        .map_err(query_error(path, "query location criteria"))?;

    for row in rows {
        let (raw_id, criterion, value) =
            row.map_err(query_error(path, "read location criteria row"))?;
        let id = location_id(raw_id)?;
        let Some(location) = positions
            .get(&id)
            .and_then(|position| locations.get_mut(*position))
        else {
            warn!("ignoring value for criterion '{criterion}' on unknown location {id}");
            continue;
        };
        location.criteria_values.insert(criterion, value);
    }
    Ok(())
}
