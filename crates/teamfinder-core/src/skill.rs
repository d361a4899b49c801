//! Skill domain model.

use serde::{Deserialize, Serialize};

/// A skill from the backend catalogue, referenced by its slug in edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub slug: String,
    pub name: String,
}
