//! Byte stores for saved games.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{GameError, Result};

/// Name used for the saved game, as a file stem or storage key.
pub const STORAGE_KEY: &str = "tictactoe_state_v1";

/// Opaque storage for one encoded game.
pub trait Store {
    /// Read the stored bytes. `Ok(None)` if nothing was saved yet.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
}

/// In-memory store, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with bytes.
    #[must_use]
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl Store for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.bytes = Some(bytes.to_vec());
        Ok(())
    }
}

/// Store backed by a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write leaves the previous save intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/tictactoe_state_v1.bin`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.bin")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &self.path, e)),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let temp = self.temp_path();
        fs::write(&temp, bytes).map_err(|e| io_error("write", &temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| io_error("rename", &self.path, e))
    }
}

fn io_error(op: &str, path: &Path, err: std::io::Error) -> GameError {
    GameError::Persistence(format!("{op} {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write(b"abc").unwrap();
        assert_eq!(store.read().unwrap(), Some(b"abc".to_vec()));
        assert_eq!(store.bytes(), Some(&b"abc"[..]));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());

        assert_eq!(store.read().unwrap(), None);
        store.write(b"first").unwrap();
        store.write(b"second").unwrap();

        assert_eq!(store.read().unwrap(), Some(b"second".to_vec()));
        assert!(store.path().ends_with("tictactoe_state_v1.bin"));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_file_store_missing_dir_fails_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path().join("missing"));

        assert!(matches!(store.write(b"x"), Err(GameError::Persistence(_))));
    }
}
