//! Declarative rule library. Each factory captures its parameters and
//! returns a boxed closure so catalog rows stay plain data.

mod course_params;
mod predicates;

pub use course_params::*;
pub use predicates::*;

use crate::course::CourseId;
use crate::entry::ChallengeEntry;
use crate::record::AnimeRecord;
use crate::settings::UserSettings;

/// Everything a rule may inspect when judging one entry under one course.
pub struct RuleContext<'a> {
    pub anime: &'a AnimeRecord,
    pub settings: &'a UserSettings,
    pub entry: &'a ChallengeEntry,
    pub course: CourseId,
}

/// Outcome of a single criterion: the human-readable rule text and whether
/// it held. The text embeds the rule's parameters so a failed report reads
/// as an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionReport {
    pub criterion: String,
    pub satisfied: bool,
}

/// A compiled rule. Pure: same context, same report.
pub type Rule = Box<dyn Fn(&RuleContext<'_>) -> CriterionReport + Send + Sync>;

/// Comparison direction shared by the threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    AtLeast,
    AtMost,
    Above,
    Below,
}

impl Cmp {
    pub(crate) fn holds<T: PartialOrd>(self, value: T, threshold: T) -> bool {
        match self {
            Cmp::AtLeast => value >= threshold,
            Cmp::AtMost => value <= threshold,
            Cmp::Above => value > threshold,
            Cmp::Below => value < threshold,
        }
    }

    pub(crate) const fn quantity_phrase(self) -> &'static str {
        match self {
            Cmp::AtLeast => "at least",
            Cmp::AtMost => "at most",
            Cmp::Above => "more than",
            Cmp::Below => "less than",
        }
    }
}

/// Join items with commas and a trailing "or": `a, b or c`.
pub(crate) fn phrase_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} or {}", head, last.as_ref())
        }
    }
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "an unknown month",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_list_joins_with_trailing_or() {
        assert_eq!(phrase_list::<&str>(&[]), "");
        assert_eq!(phrase_list(&["TV"]), "TV");
        assert_eq!(phrase_list(&["TV", "Movie"]), "TV or Movie");
        assert_eq!(phrase_list(&["TV", "OVA", "Movie"]), "TV, OVA or Movie");
    }

    #[test]
    fn cmp_boundaries_are_inclusive_only_for_at_variants() {
        assert!(Cmp::AtLeast.holds(5, 5));
        assert!(Cmp::AtMost.holds(5, 5));
        assert!(!Cmp::Above.holds(5, 5));
        assert!(!Cmp::Below.holds(5, 5));
    }
}
