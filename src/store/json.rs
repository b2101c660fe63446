//! JSON file store for the payroll collection.
//!
//! One backing file holds the entire collection as a JSON array. Reads and
//! writes are whole-file only; saves stage into a temporary file in the
//! same directory and rename it over the target.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PayrollError, Result};
use crate::records::Employee;

pub struct JsonStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonStore {
    /// Open a store at the given path, creating parent directories.
    pub fn open(path: impl AsRef<Path>, pretty: bool) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                PayrollError::Persistence(format!("create {}: {err}", parent.display()))
            })?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            pretty,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from the backing file.
    ///
    /// A missing file is an empty payroll, not an error. A file that exists
    /// but does not parse as an array of records is `CorruptData`; any
    /// other read failure is `Persistence`.
    pub fn load(&self) -> Result<Vec<Employee>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(target: "store", path = %self.path.display(), "no backing file, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(PayrollError::Persistence(format!(
                    "read {}: {err}",
                    self.path.display()
                )));
            }
        };

        let employees: Vec<Employee> = serde_json::from_str(&raw).map_err(|err| {
            PayrollError::CorruptData(format!("parse {}: {err}", self.path.display()))
        })?;
        debug!(target: "store", count = employees.len(), "loaded payroll");
        Ok(employees)
    }

    /// Serialize the full collection and replace the backing file.
    ///
    /// The write goes to a temporary file first and only a successful
    /// write-and-sync is renamed into place, so a crash mid-save leaves
    /// the previous file intact rather than a half-written one.
    pub fn save(&self, employees: &[Employee]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir).map_err(|err| {
            PayrollError::Persistence(format!("stage {}: {err}", self.path.display()))
        })?;

        let serialized = if self.pretty {
            serde_json::to_writer_pretty(&mut staged, employees)
        } else {
            serde_json::to_writer(&mut staged, employees)
        };
        serialized.map_err(|err| {
            PayrollError::Persistence(format!("write {}: {err}", self.path.display()))
        })?;

        staged.as_file().sync_all().map_err(|err| {
            PayrollError::Persistence(format!("sync {}: {err}", self.path.display()))
        })?;
        staged.persist(&self.path).map_err(|err| {
            PayrollError::Persistence(format!("replace {}: {err}", self.path.display()))
        })?;

        debug!(target: "store", count = employees.len(), path = %self.path.display(), "saved payroll");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn employee(id: &str, salary: f64) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Name {id}"),
            position: "Eng".to_string(),
            salary,
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("payroll_data.json"), true).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("payroll_data.json"), true).unwrap();
        let employees = vec![employee("E2", 800.0), employee("E1", 1000.0)];

        store.save(&employees).unwrap();
        assert_eq!(store.load().unwrap(), employees);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("payroll_data.json"), true).unwrap();

        store
            .save(&[employee("E1", 1.0), employee("E2", 2.0)])
            .unwrap();
        store.save(&[employee("E3", 3.0)]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "E3");
    }

    #[test]
    fn save_leaves_no_staging_files_behind() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("payroll_data.json"), true).unwrap();
        store.save(&[employee("E1", 1.0)]).unwrap();

        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn save_without_parent_directory_is_persistence_error() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("gone");
        let store = JsonStore::open(nested.join("payroll_data.json"), true).unwrap();
        fs::remove_dir_all(&nested).unwrap();

        let err = store.save(&[employee("E1", 1.0)]).unwrap_err();
        assert!(matches!(err, PayrollError::Persistence(_)));
    }

    #[test]
    fn load_from_directory_path_is_persistence_error() {
        // Reading a directory fails with a non-NotFound kind, which must
        // surface as Persistence rather than an empty collection
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path(), true).unwrap();

        assert!(matches!(store.load(), Err(PayrollError::Persistence(_))));
    }

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/payroll_data.json");
        let store = JsonStore::open(&nested, true).unwrap();

        store.save(&[employee("E1", 1.0)]).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn malformed_json_is_corrupt_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payroll_data.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonStore::open(&path, true).unwrap();
        assert!(matches!(
            store.load(),
            Err(PayrollError::CorruptData(_))
        ));
    }

    #[test]
    fn wrong_shape_is_corrupt_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payroll_data.json");
        fs::write(&path, r#"{"id": "E1"}"#).unwrap();

        let store = JsonStore::open(&path, true).unwrap();
        assert!(matches!(
            store.load(),
            Err(PayrollError::CorruptData(_))
        ));
    }

    #[test]
    fn record_missing_field_is_corrupt_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payroll_data.json");
        fs::write(&path, r#"[{"id": "E1", "name": "Alice"}]"#).unwrap();

        let store = JsonStore::open(&path, true).unwrap();
        assert!(matches!(
            store.load(),
            Err(PayrollError::CorruptData(_))
        ));
    }

    #[test]
    fn compact_mode_writes_single_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payroll_data.json");
        let store = JsonStore::open(&path, false).unwrap();

        store.save(&[employee("E1", 1.0)]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains('\n'));
    }

    #[test]
    fn pretty_mode_is_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("payroll_data.json");
        let store = JsonStore::open(&path, true).unwrap();

        store.save(&[employee("E1", 1.0)]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"id\""));
    }

    #[test]
    fn save_empty_collection_writes_empty_array() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("payroll_data.json"), true).unwrap();

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
