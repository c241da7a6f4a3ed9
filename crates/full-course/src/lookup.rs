//! Seam to the external metadata provider plus the bulk refresh runner.
//! Transport lives with the caller; this module only shapes and paces.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::entry::ChallengeSet;
use crate::record::{duration_to_minutes, AiredDate, Airing, AnimeRecord, ListStatusBreakdown};

/// Provider failures. An id that simply does not resolve is `Ok(None)` on
/// [`MetadataLookup::lookup`], not an error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("metadata provider unavailable: {0}")]
    Unavailable(String),
}

/// Fetches one anime's metadata documents by provider id.
pub trait MetadataLookup: Send + Sync {
    fn lookup(&self, mal_id: u64) -> Result<Option<AnimeRecord>, LookupError>;
}

impl AnimeRecord {
    /// Assemble a record from the provider's three JSON documents: the full
    /// anime payload, the character list and the list-status statistics.
    /// Returns `None` when the core fields are missing, so malformed
    /// payloads read as "no record" rather than a half-filled one.
    pub fn from_jikan(full: &Value, characters: &Value, statistics: &Value) -> Option<AnimeRecord> {
        let data = full.get("data")?;
        let mal_id = data.get("mal_id")?.as_u64()?;
        let title = data.get("title")?.as_str()?.to_string();
        let media_type = data.get("type")?.as_str()?.to_string();

        let broadcast = data.get("broadcast");
        let day = broadcast
            .and_then(|b| b.get("day"))
            .and_then(Value::as_str)
            .or_else(|| {
                broadcast
                    .and_then(|b| b.get("string"))
                    .and_then(Value::as_str)
            })
            .unwrap_or_default()
            .to_string();
        let time = broadcast
            .and_then(|b| b.get("time"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let aired_prop = data.get("aired").and_then(|a| a.get("prop"));
        let duration = data
            .get("duration")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let character_list = characters
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let role_count = |role: &str| {
            character_list
                .iter()
                .filter(|c| c.get("role").and_then(Value::as_str) == Some(role))
                .count() as u32
        };
        let stats = statistics.get("data");
        let stat = |name: &str| {
            stats
                .and_then(|s| s.get(name))
                .and_then(Value::as_u64)
                .unwrap_or_default()
        };

        Some(AnimeRecord {
            fetched_at: Utc::now(),
            mal_id,
            title,
            media_type,
            source: str_field(data, "source"),
            episodes: u64_field(data, "episodes") as u32,
            status: str_field(data, "status"),
            aired: Airing {
                day,
                time,
                from: aired_date(aired_prop, "from"),
                to: aired_date(aired_prop, "to"),
            },
            episode_duration_minutes: duration_to_minutes(&duration),
            duration,
            rating: str_field(data, "rating"),
            score: data
                .get("score")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            rank: u64_field(data, "rank") as u32,
            popularity: u64_field(data, "popularity") as u32,
            members: u64_field(data, "members"),
            favorites: u64_field(data, "favorites"),
            season: data
                .get("season")
                .and_then(Value::as_str)
                .map(str::to_string),
            year: data
                .get("season_year")
                .and_then(Value::as_i64)
                .map(|y| y as i32),
            producers: names(data, "producers"),
            licensors: names(data, "licensors"),
            studios: names(data, "studios"),
            genres: names(data, "genres"),
            themes: names(data, "themes"),
            demographics: names(data, "demographics"),
            opening_count: theme_count(data, "openings"),
            ending_count: theme_count(data, "endings"),
            main_characters: role_count("Main"),
            supporting_characters: role_count("Supporting"),
            statistics: ListStatusBreakdown {
                watching: stat("watching"),
                completed: stat("completed"),
                on_hold: stat("on_hold"),
                plan_to_watch: stat("plan_to_watch"),
                dropped: stat("dropped"),
            },
        })
    }
}

fn str_field(data: &Value, name: &str) -> String {
    data.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn u64_field(data: &Value, name: &str) -> u64 {
    data.get(name).and_then(Value::as_u64).unwrap_or_default()
}

fn names(data: &Value, field: &str) -> Vec<String> {
    data.get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn theme_count(data: &Value, field: &str) -> u32 {
    data.get("theme")
        .and_then(|t| t.get(field))
        .and_then(Value::as_array)
        .map(|songs| songs.len() as u32)
        .unwrap_or_default()
}

fn aired_date(prop: Option<&Value>, field: &str) -> AiredDate {
    let part = |name: &str| {
        prop.and_then(|p| p.get(field))
            .and_then(|d| d.get(name))
            .and_then(Value::as_i64)
            .unwrap_or_default()
    };
    AiredDate {
        year: part("year") as i32,
        month: part("month") as u32,
        day: part("day") as u32,
    }
}

/// Outcome tally of one [`RefreshRunner::refresh`] pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Entries whose record was replaced.
    pub updated: usize,
    /// Ids the provider did not resolve.
    pub missing: usize,
    /// Entries skipped because the provider errored.
    pub failed: usize,
}

/// Refreshes every entry that has a provider id, pausing between calls so
/// the provider's rate limit is respected.
pub struct RefreshRunner {
    delay: Duration,
}

impl RefreshRunner {
    pub fn new(delay: Duration) -> Self {
        RefreshRunner { delay }
    }

    /// Walk the sheet in id order and refresh each entry with a parseable
    /// provider id. Each entry is written as soon as its lookup returns, so
    /// an interruption keeps everything refreshed so far. `keep_going` is
    /// polled before every call.
    pub fn refresh<L>(
        &self,
        lookup: &L,
        entries: &mut ChallengeSet,
        keep_going: impl Fn() -> bool,
    ) -> RefreshSummary
    where
        L: MetadataLookup + ?Sized,
    {
        let mut summary = RefreshSummary::default();
        let mut first = true;
        for entry in entries.values_mut() {
            let Ok(mal_id) = entry.mal_id.parse::<u64>() else {
                continue;
            };
            if !keep_going() {
                debug!(challenge = %entry.id, "refresh interrupted");
                break;
            }
            if !first {
                std::thread::sleep(self.delay);
            }
            first = false;
            match lookup.lookup(mal_id) {
                Ok(Some(record)) => {
                    debug!(challenge = %entry.id, mal_id, "record refreshed");
                    entry.anime = Some(record);
                    summary.updated += 1;
                }
                Ok(None) => {
                    warn!(challenge = %entry.id, mal_id, "provider returned no record");
                    entry.anime = None;
                    summary.missing += 1;
                }
                Err(error) => {
                    warn!(challenge = %entry.id, mal_id, %error, "lookup failed, keeping old record");
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseId;
    use crate::entry::{ChallengeEntry, ChallengeId};
    use serde_json::json;
    use std::sync::Mutex;

    fn full_payload() -> Value {
        json!({
            "data": {
                "mal_id": 1,
                "title": "Cowboy Bebop",
                "type": "TV",
                "source": "Original",
                "episodes": 26,
                "status": "Finished Airing",
                "broadcast": { "day": "Saturdays", "time": "01:00" },
                "aired": { "prop": {
                    "from": { "year": 1998, "month": 4, "day": 3 },
                    "to": { "year": 1999, "month": 4, "day": 24 }
                }},
                "duration": "24 min per ep",
                "rating": "R - 17+ (violence & profanity)",
                "score": 8.75,
                "rank": 47,
                "popularity": 43,
                "members": 1_900_000,
                "favorites": 82_000,
                "season": "spring",
                "season_year": 1998,
                "producers": [{ "name": "Bandai Visual" }],
                "licensors": [{ "name": "Funimation" }],
                "studios": [{ "name": "Sunrise" }],
                "genres": [{ "name": "Action" }, { "name": "Sci-Fi" }],
                "themes": [{ "name": "Space" }],
                "demographics": [],
                "theme": { "openings": ["Tank!"], "endings": ["The Real Folk Blues", "Space Lion", "Blue"] }
            }
        })
    }

    fn characters_payload() -> Value {
        json!({ "data": [
            { "role": "Main" }, { "role": "Main" },
            { "role": "Supporting" }, { "role": "Supporting" }, { "role": "Supporting" }
        ]})
    }

    fn statistics_payload() -> Value {
        json!({ "data": {
            "watching": 10, "completed": 20, "on_hold": 3, "plan_to_watch": 7, "dropped": 2
        }})
    }

    #[test]
    fn from_jikan_maps_the_three_documents() {
        let record = AnimeRecord::from_jikan(
            &full_payload(),
            &characters_payload(),
            &statistics_payload(),
        )
        .expect("well-formed payloads");
        assert_eq!(record.title, "Cowboy Bebop");
        assert_eq!(record.episode_duration_minutes, 24.0);
        assert_eq!(record.aired.from.to_iso().as_deref(), Some("1998-04-03"));
        assert_eq!(record.opening_count, 1);
        assert_eq!(record.ending_count, 3);
        assert_eq!(record.main_characters, 2);
        assert_eq!(record.supporting_characters, 3);
        assert_eq!(record.statistics.plan_to_watch, 7);
    }

    #[test]
    fn from_jikan_rejects_payload_without_core_fields() {
        let record = AnimeRecord::from_jikan(
            &json!({ "data": { "title": "No id" } }),
            &json!({}),
            &json!({}),
        );
        assert!(record.is_none());
    }

    struct ScriptedLookup {
        calls: Mutex<Vec<u64>>,
    }

    impl MetadataLookup for ScriptedLookup {
        fn lookup(&self, mal_id: u64) -> Result<Option<AnimeRecord>, LookupError> {
            self.calls.lock().expect("lock").push(mal_id);
            match mal_id {
                1 => Ok(Some(AnimeRecord {
                    mal_id: 1,
                    title: "Cowboy Bebop".to_string(),
                    media_type: "TV".to_string(),
                    ..Default::default()
                })),
                2 => Ok(None),
                _ => Err(LookupError::Unavailable("down".to_string())),
            }
        }
    }

    #[test]
    fn refresh_updates_resolves_and_tallies_failures() {
        let lookup = ScriptedLookup {
            calls: Mutex::new(Vec::new()),
        };
        let mut entries = ChallengeSet::new();
        for (id, mal_id) in [(1u16, "1"), (2, "2"), (3, "999"), (4, "")] {
            let mut entry = ChallengeEntry::blank(ChallengeId(id), vec![CourseId::Burger]);
            entry.mal_id = mal_id.to_string();
            entries.insert(ChallengeId(id), entry);
        }

        let runner = RefreshRunner::new(Duration::ZERO);
        let summary = runner.refresh(&lookup, &mut entries, || true);

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.failed, 1);
        assert!(entries[&ChallengeId(1)].anime.is_some());
        assert!(entries[&ChallengeId(2)].anime.is_none());
        // Entries without an id are never sent to the provider.
        assert_eq!(*lookup.calls.lock().expect("lock"), vec![1, 2, 999]);
    }

    #[test]
    fn refresh_stops_when_told_to() {
        let lookup = ScriptedLookup {
            calls: Mutex::new(Vec::new()),
        };
        let mut entries = ChallengeSet::new();
        for id in 1u16..=3 {
            let mut entry = ChallengeEntry::blank(ChallengeId(id), vec![CourseId::Burger]);
            entry.mal_id = "1".to_string();
            entries.insert(ChallengeId(id), entry);
        }

        let runner = RefreshRunner::new(Duration::ZERO);
        let summary = runner.refresh(&lookup, &mut entries, || false);
        assert_eq!(summary.updated, 0);
        assert!(lookup.calls.lock().expect("lock").is_empty());
    }
}
