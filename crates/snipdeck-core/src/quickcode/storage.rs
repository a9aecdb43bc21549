use crate::config::{ensure_config_dir, STATE_FILENAME};
use crate::error::Result;
use crate::quickcode::models::CodeGroup;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;

/// Durable persistence for the quick code state, supplied by the host.
///
/// The service reads once at startup and writes after every mutation;
/// one call is one persisted state.
pub trait StateStore {
    fn load(&self) -> Result<Vec<CodeGroup>>;
    fn save(&self, groups: &[CodeGroup]) -> Result<()>;
}

/// Pretty-printed JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Store at the default location under the snipdeck config directory.
    pub fn at_default_location() -> Result<Self> {
        let dir = ensure_config_dir()?;
        Ok(JsonFileStore::new(dir.join(STATE_FILENAME)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Vec<CodeGroup>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        // A freshly created state file may be empty
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, groups: &[CodeGroup]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_json::to_string_pretty(groups)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

/// In-memory store for hosts that own persistence themselves, and for tests.
#[derive(Default)]
pub struct MemoryStore {
    groups: RefCell<Vec<CodeGroup>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_groups(groups: Vec<CodeGroup>) -> Self {
        MemoryStore {
            groups: RefCell::new(groups),
            saves: Cell::new(0),
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Vec<CodeGroup>> {
        Ok(self.groups.borrow().clone())
    }

    fn save(&self, groups: &[CodeGroup]) -> Result<()> {
        *self.groups.borrow_mut() = groups.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quickcode::models::CodeItem;

    fn sample_state() -> Vec<CodeGroup> {
        vec![CodeGroup {
            name: "Sales".to_string(),
            code_items: vec![CodeItem {
                name: "Banner".to_string(),
                imports: vec!["a.b.C".to_string()],
                code: "Banner()".to_string(),
                order: 1.0,
                enabled: true,
            }],
            order: 1.0,
            enabled: true,
        }]
    }

    #[test]
    fn file_store_round_trips_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("quickcode.json"));
        store.save(&sample_state()).unwrap();
        assert_eq!(store.load().unwrap(), sample_state());
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("quickcode.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quickcode.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = JsonFileStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn omitted_enabled_flag_defaults_to_true() {
        let json = r#"[{"name": "Sales", "code_items": [], "order": 1.0}]"#;
        let groups: Vec<CodeGroup> = serde_json::from_str(json).unwrap();
        assert!(groups[0].enabled);
    }

    #[test]
    fn memory_store_counts_saves() {
        let store = MemoryStore::new();
        assert_eq!(store.save_count(), 0);
        store.save(&sample_state()).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.save_count(), 2);
        assert!(store.load().unwrap().is_empty());
    }
}
