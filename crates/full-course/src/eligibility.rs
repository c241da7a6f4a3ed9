//! Projects the full sheet down to what the current course selection can
//! actually score.

use std::collections::BTreeSet;

use crate::course::CourseId;
use crate::entry::ChallengeSet;
use crate::settings::CourseSelection;

/// The courses in play: at most one per group, only from enabled groups.
pub fn active_courses(selection: &CourseSelection) -> BTreeSet<CourseId> {
    CourseId::ALL
        .into_iter()
        .filter(|course| {
            let choice = selection.choice(course.group());
            choice.enabled && choice.value == *course
        })
        .collect()
}

/// Entries whose eligible-course list intersects the active set. Entries are
/// cloned, never mutated; disabling a course hides its entries without
/// touching their data.
pub fn filter_to_active(selection: &CourseSelection, entries: &ChallengeSet) -> ChallengeSet {
    let active = active_courses(selection);
    entries
        .iter()
        .filter(|(_, entry)| entry.courses.iter().any(|course| active.contains(course)))
        .map(|(id, entry)| (*id, entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ChallengeEntry, ChallengeId};
    use crate::settings::{CourseChoice, UserSettings};

    #[test]
    fn disabled_groups_contribute_no_courses() {
        let settings = UserSettings::sample("WatcherOne");
        assert!(active_courses(&settings.courses).is_empty());
    }

    #[test]
    fn one_course_per_enabled_group() {
        let mut settings = UserSettings::sample("WatcherOne");
        settings.courses.drink = CourseChoice {
            enabled: true,
            value: CourseId::Tea,
        };
        settings.courses.main = CourseChoice {
            enabled: true,
            value: CourseId::Sushi,
        };
        let active = active_courses(&settings.courses);
        assert_eq!(
            active.into_iter().collect::<Vec<_>>(),
            vec![CourseId::Tea, CourseId::Sushi]
        );
    }

    #[test]
    fn filtering_keeps_entries_reachable_from_an_active_course() {
        let mut settings = UserSettings::sample("WatcherOne");
        settings.courses.main = CourseChoice {
            enabled: true,
            value: CourseId::Pizza,
        };

        let mut entries = ChallengeSet::new();
        entries.insert(
            ChallengeId(1),
            ChallengeEntry::blank(ChallengeId(1), vec![CourseId::Pizza, CourseId::Tea]),
        );
        entries.insert(
            ChallengeId(2),
            ChallengeEntry::blank(ChallengeId(2), vec![CourseId::Tea]),
        );

        let filtered = filter_to_active(&settings.courses, &entries);
        assert!(filtered.contains_key(&ChallengeId(1)));
        assert!(!filtered.contains_key(&ChallengeId(2)));

        // Hiding is non-destructive; the source sheet keeps both entries.
        assert_eq!(entries.len(), 2);
    }
}
