//! JSON snapshot loader.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use sitewise_core::{Dataset, DatasetRecord, DatasetSource};

use crate::{DatasetLoadError, fs};

/// Dataset source backed by a JSON document on disk.
///
/// The document mirrors [`DatasetRecord`]: a `locations` array and a
/// `criteria` array, either of which may be omitted. The file is read afresh
/// on every [`snapshot`](DatasetSource::snapshot) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDatasetSource {
    path: Utf8PathBuf,
}

impl JsonDatasetSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Decode the document without validating it.
    ///
    /// # Errors
    /// Returns [`DatasetLoadError::OpenFile`] when the file cannot be opened
    /// and [`DatasetLoadError::Parse`] when it is not a dataset document.
    pub fn read_record(&self) -> Result<DatasetRecord, DatasetLoadError> {
        let file = fs::open_dataset_file(&self.path).map_err(|source| DatasetLoadError::OpenFile {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetLoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl DatasetSource for JsonDatasetSource {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use sitewise_core::{CriterionKind, DatasetError};
    use tempfile::TempDir;

    struct Workspace {
        _tmp: TempDir,
        root: Utf8PathBuf,
    }

    impl Workspace {
        fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
            let path = self.root.join(name);
            std::fs::write(&path, contents).expect("write dataset");
            path
        }
    }

    #[fixture]
    fn workspace() -> Workspace {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Workspace { _tmp: tmp, root }
    }

    #[rstest]
    fn loads_a_well_formed_document(workspace: Workspace) {
        let path = workspace.write(
            "sites.json",
            r#"{
                "locations": [
                    {"id": 1, "name": "Harbour", "address": "1 Quay", "latitude": 51.5,
                     "longitude": -0.1, "criteria": {"rent": 1200.0, "footfall": 80.0}},
                    {"id": 2, "name": "Market", "criteriaValues": {"rent": 900.0}}
                ],
                "criteria": [
                    {"id": "rent", "name": "Rent", "weight": 0.4, "type": "cost"},
                    {"id": "footfall", "name": "Footfall", "weight": 0.6, "type": "benefit"}
                ]
            }"#,
        );

        let dataset = JsonDatasetSource::new(path).snapshot().expect("load dataset");

        assert_eq!(dataset.locations().len(), 2);
        let market = dataset.locations().get(1).expect("second location");
        assert_eq!(market.value("rent"), Some(900.0));
        assert_eq!(market.value("footfall"), None);
        assert_eq!(market.address, "");
        let kinds: Vec<CriterionKind> = dataset.criteria().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, [CriterionKind::Cost, CriterionKind::Benefit]);
    }

    #[rstest]
    fn missing_arrays_yield_an_empty_snapshot(workspace: Workspace) {
        let path = workspace.write("empty.json", "{}");
        let dataset = JsonDatasetSource::new(path).snapshot().expect("load dataset");
        assert!(dataset.is_empty());
    }

    #[rstest]
    fn reports_missing_files(workspace: Workspace) {
        let source = JsonDatasetSource::new(workspace.root.join("absent.json"));
        let err = source.snapshot().expect_err("missing file");
        assert!(matches!(err, DatasetLoadError::OpenFile { ref path, .. } if path == source.path()));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::wrong_shape(r#"{"locations": 3}"#)]
    #[case::missing_name(r#"{"locations": [{"id": 1}]}"#)]
    fn reports_undecodable_documents(workspace: Workspace, #[case] contents: &str) {
        let path = workspace.write("bad.json", contents);
        let err = JsonDatasetSource::new(path).snapshot().expect_err("parse failure");
        assert!(matches!(err, DatasetLoadError::Parse { .. }));
    }

    #[rstest]
    fn reports_invalid_criterion_types(workspace: Workspace) {
        let path = workspace.write(
            "invalid.json",
            r#"{"criteria": [{"id": "rent", "name": "Rent", "weight": 1.0, "type": "Cost"}]}"#,
        );
        let err = JsonDatasetSource::new(path).snapshot().expect_err("invalid type");
        assert!(matches!(
            err,
            DatasetLoadError::Invalid {
                source: DatasetError::InvalidCriterionType { .. },
                ..
            }
        ));
    }
}
