use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{CalcError, Result};

/// A string key-value store.
///
/// Implementations never fail outward: a value that cannot be read is
/// reported as absent and a write that cannot complete is dropped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl KeyValueStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        HashMap::remove(self, key);
    }
}

/// Key-value store backed by a flat JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole map. A missing file is an empty map.
    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn update(&self, key: &str, apply: impl FnOnce(&mut BTreeMap<String, String>)) {
        let Some(mut map) = base_for_update(&self.path, self.read_map()) else {
            return;
        };
        apply(&mut map);
        if let Err(e) = self.write_map(&map) {
            warn!(path = %self.path.display(), key, error = %e, "failed to save value");
        }
    }
}

/// The map an update should start from.
///
/// A corrupt file is replaced. Any other read failure leaves the file alone,
/// so keys that could not be read are not lost.
fn base_for_update(
    path: &Path,
    read: Result<BTreeMap<String, String>>,
) -> Option<BTreeMap<String, String>> {
    match read {
        Ok(map) => Some(map),
        Err(CalcError::Io(e)) if e.kind() == ErrorKind::NotFound => Some(BTreeMap::new()),
        Err(CalcError::Json(e)) => {
            warn!(path = %path.display(), error = %e, "discarding corrupt state file");
            Some(BTreeMap::new())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "state file unreadable, not saving");
            None
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(mut map) => map.remove(key),
            Err(e) => {
                warn!(path = %self.path.display(), key, error = %e, "failed to read saved value");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.update(key, |map| {
            map.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&mut self, key: &str) {
        self.update(key, |map| {
            map.remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_set_and_get_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("state.json"));

        assert_eq!(store.get("cat_weight"), None);
        store.set("cat_weight", "4.5");
        assert_eq!(store.get("cat_weight"), Some("4.5".to_string()));

        // A second handle sees the same file
        let other = JsonFileStore::new(store.path());
        assert_eq!(other.get("cat_weight"), Some("4.5".to_string()));
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("state.json"));

        store.set("a", "1");
        store.set("b", "2");
        store.remove("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some("2".to_string()));
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let store = JsonFileStore::new(file.path());
        assert_eq!(store.get("cat_weight"), None);
    }

    #[test]
    fn test_update_base_after_read_failure() {
        let path = Path::new("state.json");

        let denied = Err(CalcError::Io(std::io::Error::from(ErrorKind::PermissionDenied)));
        assert_eq!(base_for_update(path, denied), None);

        let gone = Err(CalcError::Io(std::io::Error::from(ErrorKind::NotFound)));
        assert_eq!(base_for_update(path, gone), Some(BTreeMap::new()));

        let corrupt = serde_json::from_str::<BTreeMap<String, String>>("{ nope").unwrap_err();
        assert_eq!(base_for_update(path, Err(corrupt.into())), Some(BTreeMap::new()));
    }

    #[test]
    fn test_unwritable_path_is_not_fatal() {
        let dir = tempdir().unwrap();
        // A directory cannot be written as a file
        let mut store = JsonFileStore::new(dir.path());

        store.set("cat_weight", "4");
        assert_eq!(store.get("cat_weight"), None);
    }
}
