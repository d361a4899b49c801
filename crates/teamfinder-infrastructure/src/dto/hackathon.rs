use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use teamfinder_core::hackathon::{Hackathon, HackathonMode, HackathonStatus};
use teamfinder_core::{Result, TeamfinderError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HackathonDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_link: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub registration_end_date: String,
    pub mode: HackathonMode,
    pub status: HackathonStatus,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub team_members_minimum: u32,
    #[serde(default)]
    pub team_members_limit: u32,
    #[serde(default)]
    pub registration_link: Option<String>,
    /// Sent as a string by newer backends and as a number by older ones.
    #[serde(default)]
    pub prize_fund: Option<Value>,
}

impl TryFrom<HackathonDto> for Hackathon {
    type Error = TeamfinderError;

    fn try_from(dto: HackathonDto) -> Result<Self> {
        let prize_fund = match dto.prize_fund {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(Hackathon {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            image_link: dto.image_link,
            start_date: parse_backend_datetime(&dto.start_date)?,
            end_date: parse_backend_datetime(&dto.end_date)?,
            registration_end_date: parse_backend_datetime(&dto.registration_end_date)?,
            mode: dto.mode,
            status: dto.status,
            city: dto.city,
            team_members_minimum: dto.team_members_minimum,
            team_members_limit: dto.team_members_limit,
            registration_link: dto.registration_link,
            prize_fund,
        })
    }
}

/// Parses the timestamps the backend emits.
///
/// Accepted: RFC 3339, the same with a space instead of `T`
/// (`2026-08-22 06:00:00+00:00`), a naive date-time taken as UTC, and a bare
/// date taken as UTC midnight.
pub fn parse_backend_datetime(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let normalized = trimmed.replacen(' ', "T", 1);

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(TeamfinderError::Serialization {
        format: "datetime".to_string(),
        message: format!("unrecognised timestamp '{}'", value),
    })
}
