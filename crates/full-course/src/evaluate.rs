//! Judges one entry against everything that applies to it. Always runs the
//! full criteria list so the report names every failure, not just the first.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::course::CourseId;
use crate::entry::{ChallengeEntry, ChallengeId, ChallengeSet};
use crate::rules::{CriterionReport, RuleContext};
use crate::settings::UserSettings;

/// Itemized outcome of one evaluation. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub satisfied: bool,
    pub satisfied_criteria: Vec<String>,
    pub failed_criteria: Vec<String>,
}

impl Verdict {
    fn failure(reason: impl Into<String>) -> Self {
        Verdict {
            satisfied: false,
            satisfied_criteria: Vec::new(),
            failed_criteria: vec![reason.into()],
        }
    }
}

/// Judge `challenge_id` under `course`. Criteria run in a fixed order:
/// uniqueness, year containment, date ordering, manual confirmations,
/// required extra info, then the course's rules, then the challenge's rules.
pub fn evaluate(
    catalog: &Catalog,
    settings: &UserSettings,
    entries: &ChallengeSet,
    challenge_id: ChallengeId,
    course: CourseId,
) -> Verdict {
    let Some(entry) = entries.get(&challenge_id) else {
        return Verdict::failure(format!("Challenge {} is not on the sheet", challenge_id));
    };
    let Some(anime) = entry.anime.as_ref() else {
        return Verdict::failure("Anime not found");
    };
    let Some(challenge) = catalog.challenge(challenge_id) else {
        return Verdict::failure(format!("Challenge {} is not in the catalog", challenge_id));
    };

    let ctx = RuleContext {
        anime,
        settings,
        entry,
        course,
    };

    let mut reports = vec![
        unique_record(entries, entry, anime.mal_id),
        year_containment("started", &entry.start_date, settings.challenge_year),
        year_containment("finished", &entry.end_date, settings.challenge_year),
        dates_ordered(entry),
        manual_criteria_confirmed(entry, course),
        extra_info_complete(entry, course),
    ];
    for rule in &catalog.course(course).rules {
        reports.push(rule(&ctx));
    }
    for rule in &challenge.rules {
        reports.push(rule(&ctx));
    }

    let satisfied = reports.iter().all(|report| report.satisfied);
    let mut satisfied_criteria = Vec::new();
    let mut failed_criteria = Vec::new();
    for report in reports {
        if report.satisfied {
            satisfied_criteria.push(report.criterion);
        } else {
            failed_criteria.push(report.criterion);
        }
    }
    Verdict {
        satisfied,
        satisfied_criteria,
        failed_criteria,
    }
}

/// No other entry may hold a record with the same provider id. A failure
/// names the first conflicting challenge.
fn unique_record(entries: &ChallengeSet, entry: &ChallengeEntry, mal_id: u64) -> CriterionReport {
    for (id, other) in entries {
        if *id == entry.id {
            continue;
        }
        if other
            .anime
            .as_ref()
            .is_some_and(|anime| anime.mal_id == mal_id)
        {
            return CriterionReport {
                criterion: format!("Anime already used in challenge {}", id),
                satisfied: false,
            };
        }
    }
    CriterionReport {
        criterion: "Anime must be unique".to_string(),
        satisfied: true,
    }
}

/// An unset date passes; a set one must fall in the challenge year.
fn year_containment(verb: &str, date: &str, year: i32) -> CriterionReport {
    CriterionReport {
        criterion: format!("Anime must be {} in {}", verb, year),
        satisfied: date.is_empty() || date.starts_with(&year.to_string()),
    }
}

fn dates_ordered(entry: &ChallengeEntry) -> CriterionReport {
    CriterionReport {
        criterion: "Anime must be started before it is finished".to_string(),
        satisfied: entry.start_date.is_empty()
            || entry.end_date.is_empty()
            || entry.start_date <= entry.end_date,
    }
}

/// Every manual criterion in scope for `course` must be confirmed.
fn manual_criteria_confirmed(entry: &ChallengeEntry, course: CourseId) -> CriterionReport {
    let satisfied = entry
        .manual_criteria
        .values()
        .filter(|criterion| {
            criterion
                .courses
                .as_ref()
                .is_none_or(|courses| courses.contains(&course))
        })
        .all(|criterion| criterion.satisfied);
    CriterionReport {
        criterion: "All manual criteria must be confirmed".to_string(),
        satisfied,
    }
}

/// Every required extra-info field in scope for `course` must be non-empty.
fn extra_info_complete(entry: &ChallengeEntry, course: CourseId) -> CriterionReport {
    let satisfied = entry
        .extra_info
        .iter()
        .filter(|field| field.required)
        .filter(|field| {
            field
                .courses
                .as_ref()
                .is_none_or(|courses| courses.contains(&course))
        })
        .all(|field| !field.value.is_empty());
    CriterionReport {
        criterion: "All default extra info must be specified".to_string(),
        satisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ExtraInfoField, ManualCriterion};

    fn entry_with(id: u16, mal_id: u64) -> ChallengeEntry {
        let mut entry = ChallengeEntry::blank(ChallengeId(id), vec![CourseId::Burger]);
        entry.anime = Some(crate::record::AnimeRecord {
            mal_id,
            title: "Some Show".to_string(),
            media_type: "TV".to_string(),
            ..Default::default()
        });
        entry
    }

    #[test]
    fn duplicate_record_names_the_conflicting_challenge() {
        let mut entries = ChallengeSet::new();
        entries.insert(ChallengeId(1), entry_with(1, 40));
        entries.insert(ChallengeId(2), entry_with(2, 40));
        let report = unique_record(&entries, &entries[&ChallengeId(2)], 40);
        assert!(!report.satisfied);
        assert_eq!(report.criterion, "Anime already used in challenge 1");
    }

    #[test]
    fn unset_dates_pass_year_containment() {
        assert!(year_containment("started", "", 2026).satisfied);
        assert!(year_containment("started", "2026-01-01", 2026).satisfied);
        assert!(!year_containment("started", "2025-12-31", 2026).satisfied);
    }

    #[test]
    fn year_containment_follows_configured_year() {
        let report = year_containment("finished", "2027-03-01", 2027);
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime must be finished in 2027");
    }

    #[test]
    fn date_order_allows_equal_days() {
        let mut entry = entry_with(1, 40);
        entry.start_date = "2026-04-01".to_string();
        entry.end_date = "2026-04-01".to_string();
        assert!(dates_ordered(&entry).satisfied);
        entry.end_date = "2026-03-31".to_string();
        assert!(!dates_ordered(&entry).satisfied);
    }

    #[test]
    fn scoped_manual_criterion_only_counts_for_its_course() {
        let mut entry = entry_with(1, 40);
        entry.manual_criteria.insert(
            1,
            ManualCriterion {
                text: "Shared staff member".to_string(),
                satisfied: false,
                courses: Some(vec![CourseId::Fries]),
            },
        );
        assert!(manual_criteria_confirmed(&entry, CourseId::Burger).satisfied);
        assert!(!manual_criteria_confirmed(&entry, CourseId::Fries).satisfied);
    }

    #[test]
    fn unscoped_extra_info_blocks_every_course() {
        let mut entry = entry_with(1, 40);
        entry.extra_info.push(ExtraInfoField {
            label: "Screenshot:".to_string(),
            value: String::new(),
            required: true,
            courses: None,
        });
        assert!(!extra_info_complete(&entry, CourseId::Burger).satisfied);
        assert!(!extra_info_complete(&entry, CourseId::Fries).satisfied);
        entry.extra_info[0].value = "link".to_string();
        assert!(extra_info_complete(&entry, CourseId::Burger).satisfied);
    }
}
