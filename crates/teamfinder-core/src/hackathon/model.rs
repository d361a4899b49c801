use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{format_date_range, format_registration_deadline, team_members_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonMode {
    Online,
    Offline,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image_link: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    pub mode: HackathonMode,
    pub status: HackathonStatus,
    pub city: Option<String>,
    pub team_members_minimum: u32,
    pub team_members_limit: u32,
    pub registration_link: Option<String>,
    pub prize_fund: Option<String>,
}

impl Hackathon {
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.status == HackathonStatus::Open && now <= self.registration_end_date
    }

    pub fn dates_label(&self) -> String {
        format_date_range(self.start_date, self.end_date)
    }

    pub fn registration_label(&self) -> String {
        format_registration_deadline(self.registration_end_date)
    }

    pub fn team_size_label(&self) -> String {
        team_members_range(self.team_members_minimum, self.team_members_limit)
    }
}
