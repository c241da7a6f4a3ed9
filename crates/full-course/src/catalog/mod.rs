//! The fixed rule catalog: thirty courses and 192 challenges. Built once at
//! startup with [`Catalog::standard`] and passed around by reference.

mod challenges;
mod courses;

use std::collections::BTreeMap;

use crate::course::CourseId;
use crate::entry::ChallengeId;
use crate::rules::Rule;

/// How one course parameter is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Pick one of the listed values.
    Select(Vec<String>),
    /// Free text.
    Text,
}

/// Descriptor for a runtime-configured course parameter, enough for a
/// consumer to render a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// One course's ruleset.
pub struct CourseSpec {
    pub label: &'static str,
    /// Challenges that must pass for the course to be complete.
    pub required_challenges: u32,
    /// Extra-info labels added to every eligible entry, scoped to this
    /// course.
    pub extra_info: &'static [&'static str],
    pub rules: Vec<Rule>,
    pub manual_criteria: &'static [&'static str],
    pub params: Vec<ParamSpec>,
}

/// One challenge's ruleset.
pub struct ChallengeSpec {
    pub description: &'static str,
    /// Extra-info labels every eligible entry carries, regardless of course.
    pub extra_info: &'static [&'static str],
    pub courses: &'static [CourseId],
    pub rules: Vec<Rule>,
    pub manual_criteria: &'static [&'static str],
}

/// The whole catalog. Immutable once constructed.
pub struct Catalog {
    /// Indexed by [`CourseId::index`], one spec per course.
    courses: Vec<CourseSpec>,
    challenges: BTreeMap<ChallengeId, ChallengeSpec>,
}

impl Catalog {
    /// The standard menu and challenge list.
    pub fn standard() -> Self {
        Catalog {
            courses: courses::build(),
            challenges: challenges::build(),
        }
    }

    pub fn course(&self, id: CourseId) -> &CourseSpec {
        &self.courses[id.index()]
    }

    pub fn challenge(&self, id: ChallengeId) -> Option<&ChallengeSpec> {
        self.challenges.get(&id)
    }

    pub fn challenges(&self) -> impl Iterator<Item = (&ChallengeId, &ChallengeSpec)> {
        self.challenges.iter()
    }

    pub fn challenge_count(&self) -> usize {
        self.challenges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_the_full_menu() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.challenge_count(), 192);
        for course in CourseId::ALL {
            assert!(!catalog.course(course).label.is_empty());
        }
    }

    #[test]
    fn challenge_ids_are_dense_from_one() {
        let catalog = Catalog::standard();
        let ids: Vec<u16> = catalog.challenges().map(|(id, _)| id.0).collect();
        let expected: Vec<u16> = (1..=192).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn every_challenge_names_at_least_one_course() {
        let catalog = Catalog::standard();
        for (id, challenge) in catalog.challenges() {
            assert!(
                !challenge.courses.is_empty(),
                "challenge {} has no eligible courses",
                id
            );
            assert!(
                !challenge.description.is_empty(),
                "challenge {} has no description",
                id
            );
        }
    }

    #[test]
    fn required_challenge_totals_match_the_menu() {
        let catalog = Catalog::standard();
        let required = |course: CourseId| catalog.course(course).required_challenges;
        assert_eq!(required(CourseId::Coffee), 5);
        assert_eq!(required(CourseId::Soup), 20);
        assert_eq!(required(CourseId::Burger), 25);
        assert_eq!(required(CourseId::Fries), 15);
        assert_eq!(required(CourseId::Cake), 10);
    }

    #[test]
    fn select_params_always_offer_values() {
        let catalog = Catalog::standard();
        for course in CourseId::ALL {
            for param in &catalog.course(course).params {
                if let ParamKind::Select(values) = &param.kind {
                    assert!(
                        !values.is_empty(),
                        "{} parameter '{}' offers no values",
                        course,
                        param.name
                    );
                }
            }
        }
    }
}
