//! User profile domain model.

use serde::{Deserialize, Serialize};

use crate::achievement::Achievement;
use crate::skill::Skill;

/// A chat-platform user's profile as owned by the backend.
///
/// The client only ever holds a read-through cached copy of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub university: Option<String>,
    pub link: Option<String>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
}

impl User {
    /// Name shown in headers: first and last name, falling back to the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !full.is_empty() {
            return full;
        }
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => format!("@{}", username),
            _ => format!("user #{}", self.id),
        }
    }

    pub fn skill_slugs(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.slug.clone()).collect()
    }
}
