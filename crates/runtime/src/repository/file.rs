//! File-based DuelRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use duel_core::DuelState;

use crate::repository::{DuelId, DuelRepository, RepositoryError, Result};

/// File-based implementation of DuelRepository.
///
/// # File Format
///
/// Each duel is stored as pretty-printed JSON in `duel_{id}.json`. Writes go
/// to a temporary file first and are renamed into place, so a crash never
/// leaves a half-written duel behind.
pub struct FileDuelRepo {
    base_dir: PathBuf,
    next_id: AtomicU64,
}

impl FileDuelRepo {
    /// Opens (and creates if needed) a repository directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        let repo = Self {
            base_dir,
            next_id: AtomicU64::new(1),
        };
        let next = repo.list()?.last().map_or(1, |id| id.0 + 1);
        repo.next_id.store(next, Ordering::Relaxed);
        Ok(repo)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn duel_path(&self, id: DuelId) -> PathBuf {
        self.base_dir.join(format!("duel_{}.json", id.0))
    }

    fn write(&self, path: &Path, state: &DuelState) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl DuelRepository for FileDuelRepo {
    fn create(&self, state: &DuelState) -> Result<DuelId> {
        let id = DuelId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let path = self.duel_path(id);
        if path.exists() {
            return Err(RepositoryError::AlreadyExists(id));
        }
        self.write(&path, state)?;
        tracing::debug!("Created {} at {}", id, path.display());
        Ok(id)
    }

    fn load(&self, id: DuelId) -> Result<Option<DuelState>> {
        let path = self.duel_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let state: DuelState = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded {} from {}", id, path.display());

        Ok(Some(state))
    }

    fn save(&self, id: DuelId, state: &DuelState) -> Result<()> {
        let path = self.duel_path(id);
        self.write(&path, state)?;
        tracing::debug!("Saved {} (turn {}) to {}", id, state.turn, path.display());
        Ok(())
    }

    fn exists(&self, id: DuelId) -> bool {
        self.duel_path(id).exists()
    }

    fn delete(&self, id: DuelId) -> Result<()> {
        let path = self.duel_path(id);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted {}", id);
        }

        Ok(())
    }

    fn list(&self) -> Result<Vec<DuelId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("duel_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u64>()
            {
                ids.push(DuelId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
