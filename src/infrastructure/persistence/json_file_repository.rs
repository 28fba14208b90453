//! Creature store backed by a single JSON file
//!
//! The whole file is read and rewritten on every call, which is fine for
//! bestiaries of a few thousand entries. Writes go to a sibling temp file
//! that is renamed over the store, so readers see the old or new contents
//! and never a partial file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use uuid::Uuid;

use super::{CreatureEntity, CreatureRepository};

pub struct JsonFileCreatureRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl JsonFileCreatureRepository {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CreatureEntity>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read creature store {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw)
            .with_context(|| format!("Corrupt creature store {}", self.path.display()))
    }

    fn store(&self, records: &[CreatureEntity]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(records)?;
        let temp = self.temp_path();
        fs::write(&temp, json)
            .with_context(|| format!("Failed to write creature store {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace creature store {}", self.path.display()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock.lock().map_err(poisoned)
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("Creature store lock poisoned")
}

impl CreatureRepository for JsonFileCreatureRepository {
    fn save(&self, record: CreatureEntity) -> Result<()> {
        let _guard = self.guard()?;
        let mut records = self.load()?;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                let replacement = record.replacing(existing);
                *existing = replacement;
            }
            None => records.push(record),
        }
        self.store(&records)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Wrote creature store"
        );
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Vec<CreatureEntity>> {
        let _guard = self.guard()?;
        Ok(self.load()?.into_iter().filter(|r| r.id == id).collect())
    }

    fn find_all(&self) -> Result<Vec<CreatureEntity>> {
        let _guard = self.guard()?;
        self.load()
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let _guard = self.guard()?;
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.store(&records)?;
        Ok(true)
    }
}
