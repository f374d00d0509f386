//! Fixture datasets shared by the rank command tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Two locations scored on a cost and a benefit criterion.
///
/// SAW ranks Harbour (0.75) above Market (0.6667); WP ranks Harbour
/// (0.5505) above Market (0.4495).
pub(super) const SAMPLE_DATASET: &str = r#"{
  "locations": [
    {"id": 1, "name": "Harbour", "address": "1 Quay", "latitude": 51.5, "longitude": -0.1,
     "criteria": {"rent": 1000.0, "footfall": 300.0}},
    {"id": 2, "name": "Market", "address": "3 Square", "latitude": 51.4, "longitude": -0.2,
     "criteria": {"rent": 500.0, "footfall": 100.0}}
  ],
  "criteria": [
    {"id": "rent", "name": "Rent", "weight": 0.5, "type": "cost"},
    {"id": "footfall", "name": "Footfall", "weight": 0.5, "type": "benefit"}
  ]
}"#;

/// Same content as [`SAMPLE_DATASET`] laid out as relational tables.
pub(super) const SAMPLE_DATABASE_SQL: &str = "
    CREATE TABLE locations (id INTEGER PRIMARY KEY, name TEXT NOT NULL,
        address TEXT NOT NULL, latitude REAL NOT NULL, longitude REAL NOT NULL);
    CREATE TABLE criteria (id TEXT PRIMARY KEY, name TEXT NOT NULL,
        weight REAL NOT NULL, type TEXT NOT NULL);
    CREATE TABLE location_criteria (location_id INTEGER, criteria_id TEXT,
        value REAL NOT NULL, PRIMARY KEY (location_id, criteria_id));
    INSERT INTO locations VALUES (1, 'Harbour', '1 Quay', 51.5, -0.1);
    INSERT INTO locations VALUES (2, 'Market', '3 Square', 51.4, -0.2);
    INSERT INTO criteria VALUES ('rent', 'Rent', 0.5, 'cost');
    INSERT INTO criteria VALUES ('footfall', 'Footfall', 0.5, 'benefit');
    INSERT INTO location_criteria VALUES (1, 'rent', 1000), (1, 'footfall', 300);
    INSERT INTO location_criteria VALUES (2, 'rent', 500), (2, 'footfall', 100);
";

/// Temporary directory with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_dataset(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, SAMPLE_DATASET.as_bytes());
        path
    }

    pub(super) fn write_database(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        let connection = rusqlite::Connection::open(path.as_std_path()).expect("create database");
        connection
            .execute_batch(SAMPLE_DATABASE_SQL)
            .expect("populate database");
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Decode rank output into `(location, score)` pairs.
pub(super) fn standings(output: &[u8]) -> Vec<(String, f64)> {
    let value: serde_json::Value = serde_json::from_slice(output).expect("output should be JSON");
    value
        .as_array()
        .expect("ranking should be a JSON array")
        .iter()
        .map(|entry| {
            let name = entry["location"].as_str().expect("location name").to_owned();
            let score = entry["score"].as_f64().expect("numeric score");
            (name, score)
        })
        .collect()
}
