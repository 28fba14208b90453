//! In-process creature store

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use uuid::Uuid;

use super::{CreatureEntity, CreatureRepository};

/// Keeps records in a map for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryCreatureRepository {
    records: RwLock<HashMap<Uuid, CreatureEntity>>,
}

impl InMemoryCreatureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("In-memory creature store lock poisoned")
}

impl CreatureRepository for InMemoryCreatureRepository {
    fn save(&self, record: CreatureEntity) -> Result<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = match records.get(&record.id) {
            Some(previous) => record.replacing(previous),
            None => record,
        };
        tracing::debug!(creature_id = %record.id, "Stored creature record in memory");
        records.insert(record.id, record);
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Vec<CreatureEntity>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned().into_iter().collect())
    }

    fn find_all(&self) -> Result<Vec<CreatureEntity>> {
        let records = self.records.read().map_err(poisoned)?;
        let mut all: Vec<_> = records.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(&id).is_some())
    }
}
