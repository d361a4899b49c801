//! Inline checks for profile edits, run before any request is made.

use crate::error::{Result, TeamfinderError};

pub const MAX_BIO_CHARS: usize = 256;
pub const MAX_SKILLS: usize = 10;

pub fn validate_bio(bio: &str) -> Result<()> {
    if bio.chars().count() > MAX_BIO_CHARS {
        return Err(TeamfinderError::validation(format!(
            "bio must be at most {} characters",
            MAX_BIO_CHARS
        )));
    }
    Ok(())
}

pub fn validate_skill_count(count: usize) -> Result<()> {
    if count > MAX_SKILLS {
        return Err(TeamfinderError::validation(format!(
            "cannot select more than {} skills",
            MAX_SKILLS
        )));
    }
    Ok(())
}
