//! Per-challenge progress state derived from the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::course::CourseId;
use crate::record::AnimeRecord;

/// Identifier of one catalog challenge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChallengeId(pub u16);

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A criterion the user confirms by hand. `courses: None` applies to every
/// course the challenge is eligible for; otherwise only the listed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualCriterion {
    pub text: String,
    pub satisfied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseId>>,
}

/// A free-text field the user must fill in before an entry can pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfoField {
    pub label: String,
    pub value: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseId>>,
}

/// One challenge slot the user fills in over the year. Dates are zero-padded
/// `YYYY-MM-DD` strings, empty until set, and compared lexically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeEntry {
    pub id: ChallengeId,
    #[serde(default)]
    pub mal_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub extra_info: Vec<ExtraInfoField>,
    /// Keyed by [`criterion_key`] of the criterion text.
    #[serde(default)]
    pub manual_criteria: BTreeMap<u32, ManualCriterion>,
    pub courses: Vec<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime: Option<AnimeRecord>,
}

/// The whole progress sheet, ordered by challenge id.
pub type ChallengeSet = BTreeMap<ChallengeId, ChallengeEntry>;

/// Stable non-cryptographic hash of a manual criterion's text (djb2 xor
/// variant). Keying attestations on the text keeps them intact when the
/// catalog is reordered. Identical text under different course scopes shares
/// one key; that collision is a known limitation.
pub fn criterion_key(text: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in text.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(byte);
    }
    hash
}

impl ChallengeEntry {
    /// An entry with nothing filled in yet.
    pub fn blank(id: ChallengeId, courses: Vec<CourseId>) -> Self {
        ChallengeEntry {
            id,
            mal_id: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            extra_info: Vec::new(),
            manual_criteria: BTreeMap::new(),
            courses,
            anime: None,
        }
    }

    /// Apply one field edit. Unknown labels and keys are rejected so a stale
    /// client cannot silently create state the catalog knows nothing about.
    pub fn apply(&mut self, update: EntryUpdate) -> Result<(), UpdateError> {
        match update {
            EntryUpdate::MalId { value } => self.mal_id = value,
            EntryUpdate::StartDate { value } => self.start_date = value,
            EntryUpdate::EndDate { value } => self.end_date = value,
            EntryUpdate::ExtraInfo { label, value } => {
                let field = self
                    .extra_info
                    .iter_mut()
                    .find(|field| field.label == label)
                    .ok_or(UpdateError::UnknownExtraInfo(label))?;
                field.value = value;
            }
            EntryUpdate::ManualCriterion { key, satisfied } => {
                let criterion = self
                    .manual_criteria
                    .get_mut(&key)
                    .ok_or(UpdateError::UnknownCriterion(key))?;
                criterion.satisfied = satisfied;
            }
            EntryUpdate::Record { record } => self.anime = Some(*record),
            EntryUpdate::ClearRecord => self.anime = None,
        }
        Ok(())
    }
}

/// One edit to a [`ChallengeEntry`], tagged by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum EntryUpdate {
    MalId { value: String },
    StartDate { value: String },
    EndDate { value: String },
    ExtraInfo { label: String, value: String },
    ManualCriterion { key: u32, satisfied: bool },
    Record { record: Box<AnimeRecord> },
    ClearRecord,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UpdateError {
    #[error("no extra info field labelled '{0}'")]
    UnknownExtraInfo(String),
    #[error("no manual criterion with key {0}")]
    UnknownCriterion(u32),
}

/// Build a fresh progress sheet from the catalog: challenge-level extra info
/// and criteria unscoped, course-level ones scoped to their course, nothing
/// confirmed. Same catalog in, same sheet out.
pub fn generate_entries(catalog: &Catalog) -> ChallengeSet {
    let mut entries = ChallengeSet::new();
    for (id, challenge) in catalog.challenges() {
        let mut entry = ChallengeEntry::blank(*id, challenge.courses.to_vec());

        for label in challenge.extra_info {
            entry.extra_info.push(ExtraInfoField {
                label: (*label).to_string(),
                value: String::new(),
                required: true,
                courses: None,
            });
        }
        for text in challenge.manual_criteria {
            entry.manual_criteria.insert(
                criterion_key(text),
                ManualCriterion {
                    text: (*text).to_string(),
                    satisfied: false,
                    courses: None,
                },
            );
        }

        for course in challenge.courses {
            let spec = catalog.course(*course);
            for label in spec.extra_info {
                entry.extra_info.push(ExtraInfoField {
                    label: (*label).to_string(),
                    value: String::new(),
                    required: true,
                    courses: Some(vec![*course]),
                });
            }
            for text in spec.manual_criteria {
                entry.manual_criteria.insert(
                    criterion_key(text),
                    ManualCriterion {
                        text: (*text).to_string(),
                        satisfied: false,
                        courses: Some(vec![*course]),
                    },
                );
            }
        }

        entries.insert(*id, entry);
    }
    entries
}

/// Regenerate the sheet from the catalog while keeping everything the user
/// already put in: ids, dates, cached records, extra-info values matched by
/// label and scope, attestations matched by key. State for criteria no
/// longer in the catalog is dropped.
pub fn merge_entries(existing: &ChallengeSet, catalog: &Catalog) -> ChallengeSet {
    let mut fresh = generate_entries(catalog);
    for (id, entry) in fresh.iter_mut() {
        let Some(old) = existing.get(id) else {
            continue;
        };
        entry.mal_id = old.mal_id.clone();
        entry.start_date = old.start_date.clone();
        entry.end_date = old.end_date.clone();
        entry.anime = old.anime.clone();
        for field in entry.extra_info.iter_mut() {
            if let Some(previous) = old
                .extra_info
                .iter()
                .find(|f| f.label == field.label && f.courses == field.courses)
            {
                field.value = previous.value.clone();
            }
        }
        for (key, criterion) in entry.manual_criteria.iter_mut() {
            if let Some(previous) = old.manual_criteria.get(key) {
                criterion.satisfied = previous.satisfied;
            }
        }
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criterion_key_is_stable() {
        let text = "Watch an anime that aired the same day as your birthday";
        assert_eq!(criterion_key(text), criterion_key(text));
        assert_ne!(criterion_key(text), criterion_key("something else"));
    }

    #[test]
    fn apply_rejects_unknown_extra_info_label() {
        let mut entry = ChallengeEntry::blank(ChallengeId(3), vec![CourseId::Burger]);
        let err = entry
            .apply(EntryUpdate::ExtraInfo {
                label: "Screenshot:".to_string(),
                value: "link".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, UpdateError::UnknownExtraInfo("Screenshot:".to_string()));
    }

    #[test]
    fn apply_flips_manual_criterion() {
        let mut entry = ChallengeEntry::blank(ChallengeId(3), vec![CourseId::Burger]);
        let key = criterion_key("Anime must be good");
        entry.manual_criteria.insert(
            key,
            ManualCriterion {
                text: "Anime must be good".to_string(),
                satisfied: false,
                courses: None,
            },
        );
        entry
            .apply(EntryUpdate::ManualCriterion {
                key,
                satisfied: true,
            })
            .expect("known key");
        assert!(entry.manual_criteria[&key].satisfied);
    }

    #[test]
    fn entry_round_trips_through_json() {
        let mut entry = ChallengeEntry::blank(ChallengeId(7), vec![CourseId::Tea]);
        entry.start_date = "2026-02-01".to_string();
        entry.extra_info.push(ExtraInfoField {
            label: "MAL/Anime+ Screenshot:".to_string(),
            value: String::new(),
            required: true,
            courses: Some(vec![CourseId::Tea]),
        });
        let json = serde_json::to_string(&entry).expect("serializes");
        let back: ChallengeEntry = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, entry);
    }
}
