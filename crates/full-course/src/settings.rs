//! Runtime choices: who is playing, which year, which courses, and the
//! per-course rule parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Catalog, ParamKind};
use crate::course::{CourseGroup, CourseId};

/// One group's pick: whether the group is played at all and which course
/// was chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChoice {
    pub enabled: bool,
    pub value: CourseId,
}

/// One pick per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub drink: CourseChoice,
    pub starter: CourseChoice,
    pub main: CourseChoice,
    pub side: CourseChoice,
    pub dessert: CourseChoice,
}

impl CourseSelection {
    pub fn choice(&self, group: CourseGroup) -> CourseChoice {
        match group {
            CourseGroup::Drink => self.drink,
            CourseGroup::Starter => self.starter,
            CourseGroup::Main => self.main,
            CourseGroup::Side => self.side,
            CourseGroup::Dessert => self.dessert,
        }
    }
}

impl Default for CourseSelection {
    /// Every group disabled, pointing at its first course.
    fn default() -> Self {
        CourseSelection {
            drink: CourseChoice {
                enabled: false,
                value: CourseId::Coffee,
            },
            starter: CourseChoice {
                enabled: false,
                value: CourseId::Soup,
            },
            main: CourseChoice {
                enabled: false,
                value: CourseId::Burger,
            },
            side: CourseChoice {
                enabled: false,
                value: CourseId::Fries,
            },
            dessert: CourseChoice {
                enabled: false,
                value: CourseId::Cake,
            },
        }
    }
}

/// Everything the user configures for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub username: String,
    /// Calendar year entries must be watched within.
    pub challenge_year: i32,
    pub courses: CourseSelection,
    /// Operands for the course-parameterized rules, keyed by course then
    /// parameter name.
    #[serde(default)]
    pub course_params: BTreeMap<CourseId, BTreeMap<String, String>>,
}

impl UserSettings {
    pub fn new(username: impl Into<String>, challenge_year: i32) -> Self {
        UserSettings {
            username: username.into(),
            challenge_year,
            courses: CourseSelection::default(),
            course_params: BTreeMap::new(),
        }
    }

    /// The configured value for one course parameter. Empty strings count
    /// as unset so blank form fields never satisfy a rule by accident.
    pub fn param(&self, course: CourseId, name: &str) -> Option<&str> {
        self.course_params
            .get(&course)?
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn set_param(
        &mut self,
        course: CourseId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.course_params
            .entry(course)
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Each group's pick must actually belong to that group.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for group in CourseGroup::ALL {
            let choice = self.courses.choice(group);
            if choice.value.group() != group {
                return Err(SettingsError::GroupMismatch {
                    group,
                    course: choice.value,
                });
            }
        }
        Ok(())
    }

    /// Seed every course parameter the catalog declares: selects with their
    /// first option, free text with an empty string.
    pub fn seed_params(&mut self, catalog: &Catalog) {
        for course in CourseId::ALL {
            for param in &catalog.course(course).params {
                let default = match &param.kind {
                    ParamKind::Select(values) => {
                        values.first().cloned().unwrap_or_default()
                    }
                    ParamKind::Text => String::new(),
                };
                self.course_params
                    .entry(course)
                    .or_default()
                    .entry(param.name.to_string())
                    .or_insert(default);
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("course {course} does not belong to the {group} group")]
    GroupMismatch {
        group: CourseGroup,
        course: CourseId,
    },
}

#[cfg(test)]
impl UserSettings {
    /// Bare settings for unit tests.
    pub(crate) fn sample(username: &str) -> Self {
        UserSettings::new(username, 2026)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_disabled_and_well_formed() {
        let settings = UserSettings::new("WatcherOne", 2026);
        settings.validate().expect("defaults are valid");
        for group in CourseGroup::ALL {
            let choice = settings.courses.choice(group);
            assert!(!choice.enabled);
            assert_eq!(choice.value.group(), group);
        }
    }

    #[test]
    fn cross_group_pick_is_rejected() {
        let mut settings = UserSettings::new("WatcherOne", 2026);
        settings.courses.drink = CourseChoice {
            enabled: true,
            value: CourseId::Burger,
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err,
            SettingsError::GroupMismatch {
                group: CourseGroup::Drink,
                course: CourseId::Burger,
            }
        );
    }

    #[test]
    fn empty_param_reads_as_unset() {
        let mut settings = UserSettings::new("WatcherOne", 2026);
        settings.set_param(CourseId::Soda, "Licensor/Producer/Studio", "");
        assert_eq!(settings.param(CourseId::Soda, "Licensor/Producer/Studio"), None);
        settings.set_param(CourseId::Soda, "Licensor/Producer/Studio", "Aniplex");
        assert_eq!(
            settings.param(CourseId::Soda, "Licensor/Producer/Studio"),
            Some("Aniplex")
        );
    }
}
