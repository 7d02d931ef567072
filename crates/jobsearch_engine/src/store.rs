use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{AtomicFileWriter, PersistError};

/// String-keyed persistent storage, one value per key.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    /// Replaces whatever was stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set(key, value)
    }
}

/// Stores every key as `{dir}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    writer: AtomicFileWriter,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir().join(file_name(key))
    }
}

fn file_name(key: &str) -> String {
    format!("{key}.json")
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.writer.write(&file_name(key), value)?;
        Ok(())
    }
}

/// In-memory store. Clones share the same entries, which lets tests model
/// a restart by building a second consumer over the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| PersistError::StateDir("memory store poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| PersistError::StateDir("memory store poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
