use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date as exposed by the metadata provider. Components are zero
/// when the provider does not know them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiredDate {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub day: u32,
}

impl AiredDate {
    /// Zero-padded `YYYY-MM-DD`, or `None` when any component is unknown.
    /// The padding keeps lexical ordering equal to chronological ordering.
    pub fn to_iso(self) -> Option<String> {
        if self.year == 0 || self.month == 0 || self.day == 0 {
            return None;
        }
        Some(format!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }
}

/// Broadcast slot plus the airing window of a series.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airing {
    /// Weekday name, e.g. "Mondays" or "Monday" depending on provider mood.
    #[serde(default)]
    pub day: String,
    /// Local broadcast time, "HH:MM".
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub from: AiredDate,
    #[serde(default)]
    pub to: AiredDate,
}

/// Member counts by list status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStatusBreakdown {
    #[serde(default)]
    pub watching: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub on_hold: u64,
    #[serde(default)]
    pub plan_to_watch: u64,
    #[serde(default)]
    pub dropped: u64,
}

/// One bucket of [`ListStatusBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStatus {
    Watching,
    Completed,
    OnHold,
    PlanToWatch,
    Dropped,
}

impl ListStatus {
    /// Wording used inside criterion descriptions.
    pub const fn label(self) -> &'static str {
        match self {
            ListStatus::Watching => "watching",
            ListStatus::Completed => "completed",
            ListStatus::OnHold => "on-hold",
            ListStatus::PlanToWatch => "plan-to-watch",
            ListStatus::Dropped => "dropped",
        }
    }
}

impl ListStatusBreakdown {
    pub fn count(&self, status: ListStatus) -> u64 {
        match status {
            ListStatus::Watching => self.watching,
            ListStatus::Completed => self.completed,
            ListStatus::OnHold => self.on_hold,
            ListStatus::PlanToWatch => self.plan_to_watch,
            ListStatus::Dropped => self.dropped,
        }
    }
}

/// Immutable snapshot of one anime's metadata. The engine only ever reads
/// these fields; refreshing replaces the whole record. Numeric fields default
/// to zero when the provider reports nothing, which makes every threshold
/// comparison fail closed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeRecord {
    /// When this snapshot was fetched.
    #[serde(default)]
    pub fetched_at: DateTime<Utc>,
    pub mal_id: u64,
    pub title: String,
    /// Media type, e.g. "TV", "Movie", "OVA".
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub episodes: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub aired: Airing,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub episode_duration_minutes: f64,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub members: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub producers: Vec<String>,
    #[serde(default)]
    pub licensors: Vec<String>,
    #[serde(default)]
    pub studios: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub demographics: Vec<String>,
    #[serde(default)]
    pub opening_count: u32,
    #[serde(default)]
    pub ending_count: u32,
    #[serde(default)]
    pub main_characters: u32,
    #[serde(default)]
    pub supporting_characters: u32,
    #[serde(default)]
    pub statistics: ListStatusBreakdown,
}

impl AnimeRecord {
    /// Licensors, producers and studios in one pass, in that order.
    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.licensors
            .iter()
            .chain(self.producers.iter())
            .chain(self.studios.iter())
            .map(String::as_str)
    }

    /// Genres, themes and demographics in one pass.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.genres
            .iter()
            .chain(self.themes.iter())
            .chain(self.demographics.iter())
            .map(String::as_str)
    }
}

/// Parse provider duration strings such as "24 min per ep", "1 hr 55 min" or
/// "3 min 30 sec" into fractional minutes, rounded to two decimals.
pub fn duration_to_minutes(duration: &str) -> f64 {
    if duration == "Unknown" {
        return 0.0;
    }
    let mut minutes = 0.0;
    let mut pending: Option<f64> = None;
    for token in duration.split_whitespace() {
        if let Ok(value) = token.parse::<f64>() {
            pending = Some(value);
            continue;
        }
        if let Some(value) = pending.take() {
            match token {
                "hr" => minutes += value * 60.0,
                "min" => minutes += value,
                "sec" => minutes += value / 60.0,
                _ => {}
            }
        }
    }
    (minutes * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_per_episode_duration() {
        assert_eq!(duration_to_minutes("24 min per ep"), 24.0);
    }

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(duration_to_minutes("1 hr 55 min"), 115.0);
    }

    #[test]
    fn parses_seconds_as_fraction() {
        assert_eq!(duration_to_minutes("3 min 30 sec"), 3.5);
    }

    #[test]
    fn unknown_duration_is_zero() {
        assert_eq!(duration_to_minutes("Unknown"), 0.0);
    }

    #[test]
    fn iso_date_is_zero_padded() {
        let date = AiredDate {
            year: 2026,
            month: 1,
            day: 9,
        };
        assert_eq!(date.to_iso().as_deref(), Some("2026-01-09"));
    }

    #[test]
    fn iso_date_requires_all_components() {
        let date = AiredDate {
            year: 2026,
            month: 0,
            day: 9,
        };
        assert_eq!(date.to_iso(), None);
    }
}
