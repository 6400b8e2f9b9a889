use std::fs;
use std::path::{Path, PathBuf};

use super::domain::{Garment, OwnerId};
use super::repository::{RepositoryError, WardrobeRepository};

/// File-backed wardrobe storage: one pretty-printed JSON document per
/// owner under a root directory.
#[derive(Debug, Clone)]
pub struct JsonFileWardrobeStore {
    root: PathBuf,
}

impl JsonFileWardrobeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document_path(&self, owner: &OwnerId) -> PathBuf {
        self.root
            .join(format!("wardrobe_{}.json", owner.sanitized()))
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> RepositoryError {
    RepositoryError::Unavailable(format!("{}: {err}", path.display()))
}

impl WardrobeRepository for JsonFileWardrobeStore {
    fn load(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        let path = self.document_path(owner);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(|err| unavailable(&path, err))?;
        serde_json::from_str(&raw)
            .map_err(|err| RepositoryError::Malformed(format!("{}: {err}", path.display())))
    }

    fn store(&self, owner: &OwnerId, wardrobe: &[Garment]) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.root).map_err(|err| unavailable(&self.root, err))?;

        let path = self.document_path(owner);
        let raw = serde_json::to_string_pretty(wardrobe)
            .map_err(|err| RepositoryError::Malformed(err.to_string()))?;
        fs::write(&path, raw).map_err(|err| unavailable(&path, err))
    }
}
