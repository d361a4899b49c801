use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamfinderError};

/// Result a user got at a past hackathon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementPlace {
    Participant,
    #[serde(rename = "finalyst")]
    Finalist,
    ThirdPlace,
    SecondPlace,
    FirstPlace,
}

impl AchievementPlace {
    /// Places a user can pick in the achievement form, best first.
    pub const SELECTABLE: [AchievementPlace; 4] = [
        AchievementPlace::FirstPlace,
        AchievementPlace::SecondPlace,
        AchievementPlace::ThirdPlace,
        AchievementPlace::Participant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AchievementPlace::FirstPlace => "1 место",
            AchievementPlace::SecondPlace => "2 место",
            AchievementPlace::ThirdPlace => "3 место",
            AchievementPlace::Finalist => "Финал",
            AchievementPlace::Participant => "Участник",
        }
    }

    /// Parses the wire value (`firstPlace`, `finalyst`, ...).
    pub fn from_wire(value: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
    }
}

/// An achievement as shown in a profile.
///
/// Profile payloads embed achievements without the hackathon name and the
/// backend may leave any of hackathon, role or place empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u64,
    pub hackathon_id: Option<u64>,
    pub hackathon_name: Option<String>,
    pub role: Option<String>,
    pub place: Option<AchievementPlace>,
}

/// Form state for a new or edited achievement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementDraft {
    pub hackathon_id: Option<u64>,
    pub role: Option<String>,
    pub place: Option<AchievementPlace>,
}

impl AchievementDraft {
    /// Validates the draft; a new achievement also needs a hackathon.
    pub fn validate(&self, is_new: bool) -> Result<()> {
        let role_missing = self.role.as_deref().map(str::trim).unwrap_or("").is_empty();
        if role_missing || self.place.is_none() || (is_new && self.hackathon_id.is_none()) {
            return Err(TeamfinderError::validation(
                "hackathon, role and place are required",
            ));
        }
        Ok(())
    }

    /// Converts a validated draft for a new achievement into its parts.
    pub fn into_create(self) -> Result<(u64, String, AchievementPlace)> {
        self.validate(true)?;
        match (self.hackathon_id, self.role, self.place) {
            (Some(hackathon_id), Some(role), Some(place)) => {
                Ok((hackathon_id, role.trim().to_string(), place))
            }
            _ => Err(TeamfinderError::internal("validated draft lost a field")),
        }
    }
}

/// Partial update of an existing achievement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementPatch {
    pub role: Option<String>,
    pub place: Option<AchievementPlace>,
    pub hackathon_id: Option<u64>,
}
