use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::skill::Skill;

/// A user's card in a hackathon's pool of people looking for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
    pub hackathon_id: u64,
    pub user_id: u64,
    pub role: Role,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub skills: Vec<Skill>,
    pub registration_end_date: Option<String>,
}

/// Body of both the create and the edit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub role: Role,
}

impl ApplicationRequest {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}
