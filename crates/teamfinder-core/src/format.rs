//! Presentational formatting for hackathon cards and achievements.

use chrono::{DateTime, Datelike, TimeZone};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

fn day_month<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {}", date.day(), month)
}

/// `"22 августа - 24 августа"`
pub fn format_date_range<Tz: TimeZone>(start: DateTime<Tz>, end: DateTime<Tz>) -> String {
    format!("{} - {}", day_month(&start), day_month(&end))
}

/// `"Регистрация до 20 августа"`
pub fn format_registration_deadline<Tz: TimeZone>(date: DateTime<Tz>) -> String {
    format!("Регистрация до {}", day_month(&date))
}

/// `"2 - 5 участников"`
pub fn team_members_range(minimum: u32, limit: u32) -> String {
    format!("{} - {} участников", minimum, limit)
}

/// Appends "место" to a numeric place; the final and plain participation
/// labels stay as they are.
pub fn format_hack_place(place: &str) -> String {
    match place {
        "Финал" | "Участие" => place.to_string(),
        other => format!("{} место", other),
    }
}

/// Trimmed link, or `None` when blank.
pub fn normalize_url(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
