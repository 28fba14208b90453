//! Domain errors

use crate::domain::value_objects::CreatureId;

#[derive(Debug, thiserror::Error)]
pub enum CreaturesError {
    #[error("no creature found with id: {0}")]
    NotFound(CreatureId),
    /// Failure reported by the storage collaborator, passed through untouched
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl CreaturesError {
    /// The id that could not be found, if this is a lookup miss
    pub fn missing_id(&self) -> Option<CreatureId> {
        match self {
            Self::NotFound(id) => Some(*id),
            Self::Storage(_) => None,
        }
    }
}
