//! File-backed document store

use crate::core::Document;
use crate::error::{Result, TicketDeskError};
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-document store backed by a single JSON file
///
/// Nothing is cached between calls: every operation re-reads the file and
/// every mutation rewrites it completely, so each request observes whatever
/// the last completed save left behind. The file handle is never held open
/// across calls.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole document
    ///
    /// Fails when the file is missing, unreadable, or does not hold a valid
    /// document (all three collections are required).
    pub fn load(&self) -> Result<Document> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| TicketDeskError::StorageRead { source })?;
        serde_json::from_str(&raw).map_err(|source| TicketDeskError::StorageParse { source })
    }

    /// Persist the whole document, replacing the previous contents
    ///
    /// The output is 2-space pretty-printed JSON, the store's interchange
    /// format.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| TicketDeskError::internal(format!("failed to encode document: {e}")))?;
        fs::write(&self.path, raw).map_err(|source| TicketDeskError::StorageWrite { source })
    }

    /// Seed an empty document if the backing file does not exist yet
    ///
    /// Startup convenience only; `load` itself still fails on a missing file.
    pub fn ensure_document(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "seeding empty document");
        self.save(&Document::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Team;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileStorage {
        FileStorage::new(dir.path().join("data.json"))
    }

    #[test]
    fn test_load_missing_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        match storage.load() {
            Err(TicketDeskError::StorageRead { .. }) => {},
            other => panic!("expected StorageRead, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_json_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "not json at all").unwrap();

        match storage.load() {
            Err(TicketDeskError::StorageParse { .. }) => {},
            other => panic!("expected StorageParse, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_document_missing_collections() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"{ "teams": [] }"#).unwrap();

        assert!(matches!(
            storage.load(),
            Err(TicketDeskError::StorageParse { .. })
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let mut doc = Document::default();
        doc.teams.push(Team {
            id: 1,
            name: "Platform".to_string(),
            members: vec!["alice".to_string()],
        });

        storage.save(&doc).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save(&Document::default()).unwrap();

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        assert!(raw.contains("\n  \"teams\""), "not pretty-printed: {raw}");
    }

    #[test]
    fn test_ensure_document_seeds_once() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.ensure_document().unwrap();
        assert_eq!(storage.load().unwrap(), Document::default());

        // A second call must not clobber existing data.
        let mut doc = Document::default();
        doc.teams.push(Team {
            id: 1,
            name: "Platform".to_string(),
            members: vec![],
        });
        storage.save(&doc).unwrap();
        storage.ensure_document().unwrap();
        assert_eq!(storage.load().unwrap(), doc);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let mut doc = Document::default();
        doc.teams.push(Team {
            id: 1,
            name: "Platform".to_string(),
            members: vec![],
        });
        storage.save(&doc).unwrap();
        storage.save(&Document::default()).unwrap();

        assert_eq!(storage.load().unwrap(), Document::default());
    }
}
