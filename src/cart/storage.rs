use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use thiserror::Error;

use super::CartLine;

/// Key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "lapzenCart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cart storage io: {0}")]
    Io(#[from] io::Error),

    #[error("cart storage payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Key-value persistence for cart lines.
pub trait CartStorage {
    /// Stored lines, or an empty list when nothing was saved yet.
    fn load(&self) -> Result<Vec<CartLine>, StorageError>;
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}

/// Single JSON slot in memory. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already serialized cart, as a browser would hand it over.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(json.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        match self.raw() {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let json = serde_json::to_string(lines)?;
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(json);
        Ok(())
    }
}

/// One `<key>.json` file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, CART_STORAGE_KEY)
    }

    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec(lines)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
