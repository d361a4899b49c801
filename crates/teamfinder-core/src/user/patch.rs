use serde::Serialize;

use crate::error::Result;
use crate::validation::{validate_bio, validate_skill_count};

/// Partial update of the current user's main info.
///
/// `None` fields are left untouched by the backend. `skill_slugs`, when
/// present, replaces the whole skill set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserMainInfoPatch {
    pub bio: Option<String>,
    pub city: Option<String>,
    pub university: Option<String>,
    pub link: Option<String>,
    pub skill_slugs: Option<Vec<String>>,
}

impl UserMainInfoPatch {
    pub fn bio(bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            ..Self::default()
        }
    }

    pub fn skills(slugs: Vec<String>) -> Self {
        Self {
            skill_slugs: Some(slugs),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bio.is_none()
            && self.city.is_none()
            && self.university.is_none()
            && self.link.is_none()
            && self.skill_slugs.is_none()
    }

    /// Runs the same checks the editors run inline.
    pub fn validate(&self) -> Result<()> {
        if let Some(bio) = &self.bio {
            validate_bio(bio)?;
        }
        if let Some(slugs) = &self.skill_slugs {
            validate_skill_count(slugs.len())?;
        }
        Ok(())
    }
}
