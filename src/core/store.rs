//! Dataset store: owns the authoritative list of academic year records.
//!
//! The store starts from [`Dataset::builtin`] and changes only through
//! [`DatasetStore::import`]. Every import is all-or-nothing: the new dataset is
//! fully parsed and checked before it replaces the old one. Imports take
//! `&mut self`, so two imports can never interleave on one store.

use super::error::{ExportError, ImportError, ShapeError};
use super::models::{AcademicYearRecord, Dataset};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of exported snapshot file names
pub const EXPORT_FILE_PREFIX: &str = "ncn_stats";

/// Holds the current dataset for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStore {
    dataset: Dataset,
}

impl DatasetStore {
    /// Create a store holding the built-in dataset
    #[must_use]
    pub fn new() -> Self {
        Self::with_dataset(Dataset::builtin())
    }

    /// Create a store holding the given dataset
    #[must_use]
    pub const fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Read-only view of the current dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Copy of the current dataset for derivation
    #[must_use]
    pub fn snapshot(&self) -> Dataset {
        self.dataset.clone()
    }

    /// Replace the dataset with the records in `raw` JSON text.
    ///
    /// # Errors
    /// * [`ImportError::MalformedInput`] if `raw` is not JSON
    /// * [`ImportError::InvalidShape`] if it is not a non-empty array whose
    ///   first element has a `year`, or a record fails to decode
    ///
    /// The current dataset is left untouched on error.
    pub fn import(&mut self, raw: &str) -> Result<&Dataset, ImportError> {
        let dataset = parse_dataset(raw)?;

        for id in dataset.duplicate_ids() {
            logger::warn!("Imported dataset repeats id '{id}'; lookups return the first match");
        }
        for id in dataset.inconsistent_totals() {
            logger::warn!("Record '{id}' has a total that differs from male + female; kept as given");
        }
        for record in dataset.iter().filter(|r| !r.phd_within_faculty()) {
            logger::warn!(
                "Record '{}' lists {} PhD holders for {} faculty",
                record.id,
                record.phd_count,
                record.faculty.total
            );
        }

        logger::info!("Imported {} academic year records", dataset.len());
        self.dataset = dataset;
        Ok(&self.dataset)
    }

    /// Read a UTF-8 file and [`import`](Self::import) its contents.
    ///
    /// # Errors
    /// [`ImportError::Unreadable`] if the file cannot be read, otherwise the
    /// errors of [`import`](Self::import).
    pub fn import_file(&mut self, path: &Path) -> Result<&Dataset, ImportError> {
        logger::debug!("Reading dataset from {}", path.display());
        let raw = fs::read_to_string(path).map_err(|source| ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        self.import(&raw)
    }

    /// Serialize the dataset as pretty-printed JSON (2-space indentation).
    ///
    /// The output is accepted unchanged by [`import`](Self::import).
    ///
    /// # Errors
    /// Returns [`ExportError::Serialize`] if serialization fails.
    pub fn export(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.dataset)?)
    }

    /// Write [`export`](Self::export) to `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn export_to(&self, path: &Path) -> Result<(), ExportError> {
        let text = self.export()?;
        fs::write(path, text).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        logger::info!("Exported {} records to {}", self.dataset.len(), path.display());
        Ok(())
    }

    /// Write the export into `dir` under [`export_file_name`] for `date`,
    /// creating `dir` if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written.
    pub fn export_to_dir(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir).map_err(|source| ExportError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(export_file_name(date));
        self.export_to(&path)?;
        Ok(path)
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `ncn_stats_<YYYY-MM-DD>.json`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.json", date.format("%Y-%m-%d"))
}

/// Parse and check JSON text without touching any store.
///
/// Acceptance follows the web dashboard's gate: a non-empty array whose
/// first element has a truthy `year`. Records are then decoded into the typed
/// model, so a later record missing a field is rejected here as well.
///
/// # Errors
/// See [`DatasetStore::import`].
pub fn parse_dataset(raw: &str) -> Result<Dataset, ImportError> {
    let value: Value = serde_json::from_str(raw).map_err(ImportError::MalformedInput)?;

    let Value::Array(items) = value else {
        return Err(ShapeError::NotAnArray.into());
    };
    let first = items.first().ok_or(ShapeError::Empty)?;
    if !first.get("year").is_some_and(is_truthy) {
        return Err(ShapeError::MissingYear.into());
    }

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<AcademicYearRecord>(item).map_err(|e| ShapeError::Record {
                index,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::new(records))
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GenderBreakdown;

    const ONE_RECORD: &str = r#"[{"id":"x","year":"2030-2031","students":{"male":1,"female":1,"total":2},"faculty":{"male":1,"female":0,"total":1},"phdCount":1}]"#;

    #[test]
    fn starts_with_builtin_dataset() {
        let store = DatasetStore::new();
        assert_eq!(store.snapshot(), Dataset::builtin());
    }

    #[test]
    fn malformed_input_leaves_store_unchanged() {
        let mut store = DatasetStore::new();
        let err = store.import("not json").unwrap_err();
        assert!(matches!(err, ImportError::MalformedInput(_)));
        assert_eq!(store.dataset(), &Dataset::builtin());
    }

    #[test]
    fn empty_array_is_invalid_shape() {
        let mut store = DatasetStore::new();
        let err = store.import("[]").unwrap_err();
        assert!(matches!(err, ImportError::InvalidShape(ShapeError::Empty)));
        assert_eq!(store.dataset().len(), 4);
    }

    #[test]
    fn non_array_is_invalid_shape() {
        let err = parse_dataset(r#"{"year":"2030-2031"}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidShape(ShapeError::NotAnArray)));
    }

    #[test]
    fn falsy_year_on_first_record_is_rejected() {
        for raw in [
            r#"[{"id":"x"}]"#,
            r#"[{"id":"x","year":""}]"#,
            r#"[{"id":"x","year":0}]"#,
            r#"[{"id":"x","year":null}]"#,
            r"[42]",
        ] {
            let err = parse_dataset(raw).unwrap_err();
            assert!(
                matches!(err, ImportError::InvalidShape(ShapeError::MissingYear)),
                "{raw} gave {err:?}"
            );
        }
    }

    #[test]
    fn incomplete_later_record_names_its_index() {
        let raw = r#"[
            {"id":"a","year":"2030-2031","students":{"male":1,"female":1,"total":2},"faculty":{"male":1,"female":0,"total":1},"phdCount":1},
            {"id":"b","year":"2031-2032"}
        ]"#;
        let err = parse_dataset(raw).unwrap_err();
        assert!(matches!(
            err,
            ImportError::InvalidShape(ShapeError::Record { index: 1, .. })
        ));
    }

    #[test]
    fn valid_import_replaces_everything() {
        let mut store = DatasetStore::new();
        let imported = store.import(ONE_RECORD).expect("import");
        assert_eq!(imported.len(), 1);
        let record = &store.dataset().records()[0];
        assert_eq!(record.id, "x");
        assert_eq!(record.students, GenderBreakdown::new(1, 1, 2));
        assert_eq!(record.phd_count, 1);
    }

    #[test]
    fn duplicate_ids_are_accepted() {
        let raw = format!(
            "[{},{}]",
            &ONE_RECORD[1..ONE_RECORD.len() - 1],
            &ONE_RECORD[1..ONE_RECORD.len() - 1]
        );
        let mut store = DatasetStore::new();
        assert_eq!(store.import(&raw).expect("import").len(), 2);
    }

    #[test]
    fn export_round_trips() {
        let store = DatasetStore::new();
        let text = store.export().expect("export");
        let mut other = DatasetStore::with_dataset(Dataset::default());
        other.import(&text).expect("re-import");
        assert_eq!(other.snapshot(), store.snapshot());
    }

    #[test]
    fn export_is_pretty_with_stable_field_order() {
        let mut store = DatasetStore::new();
        store.import(ONE_RECORD).expect("import");
        let expected = "[\n  {\n    \"id\": \"x\",\n    \"year\": \"2030-2031\",\n    \"students\": {\n      \"male\": 1,\n      \"female\": 1,\n      \"total\": 2\n    },\n    \"faculty\": {\n      \"male\": 1,\n      \"female\": 0,\n      \"total\": 1\n    },\n    \"phdCount\": 1\n  }\n]";
        assert_eq!(store.export().expect("export"), expected);
    }

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
        assert_eq!(export_file_name(date), "ncn_stats_2025-03-07.json");
    }

    #[test]
    fn missing_file_is_unreadable() {
        let mut store = DatasetStore::new();
        let err = store
            .import_file(Path::new("/nonexistent/ncn_stats.json"))
            .unwrap_err();
        assert!(matches!(err, ImportError::Unreadable { .. }));
        assert_eq!(store.dataset().len(), 4);
    }
}
