//! Rule factories whose operand is chosen by the user per course. The value
//! is read from [`UserSettings::course_params`] at evaluation time, so
//! editing a parameter re-judges every affected entry without recompiling
//! anything. A missing or empty parameter never satisfies the rule.
//!
//! [`UserSettings::course_params`]: crate::settings::UserSettings

use super::{phrase_list, month_name, CriterionReport, Rule, RuleContext};
use crate::course::CourseId;

pub const PARAM_DAY: &str = "Day";
pub const PARAM_COMPANY: &str = "Licensor/Producer/Studio";
pub const PARAM_DEMOGRAPHIC: &str = "Demographic";
pub const PARAM_MONTH: &str = "Month";
pub const PARAM_SEASON: &str = "Season";
pub const PARAM_EPISODE_COUNT: &str = "Number of Episodes";
pub const PARAM_GENRE_THEME_1: &str = "Genre/Theme #1";
pub const PARAM_GENRE_THEME_2: &str = "Genre/Theme #2";
pub const PARAM_YEAR_1: &str = "Year #1";
pub const PARAM_YEAR_2: &str = "Year #2";
pub const PARAM_TYPE: &str = "Type";
pub const PARAM_LETTER: &str = "Letter";

/// Sentinel select value meaning "any non-alphanumeric leading character".
pub const LETTER_OTHER: &str = "Other";

/// Broadcast weekday equality against the configured day.
pub fn chosen_broadcast_day(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(day) = ctx.settings.param(course, PARAM_DAY) else {
            return unset(PARAM_DAY);
        };
        CriterionReport {
            criterion: format!("Anime must air on {}", day),
            satisfied: day == ctx.anime.aired.day,
        }
    })
}

/// Case-insensitive company equality against the configured name.
pub fn chosen_company(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(company) = ctx.settings.param(course, PARAM_COMPANY) else {
            return unset(PARAM_COMPANY);
        };
        CriterionReport {
            criterion: format!("Anime must be from {}", company),
            satisfied: ctx
                .anime
                .companies()
                .any(|c| c.eq_ignore_ascii_case(company)),
        }
    })
}

pub fn chosen_demographic(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(demographic) = ctx.settings.param(course, PARAM_DEMOGRAPHIC) else {
            return unset(PARAM_DEMOGRAPHIC);
        };
        CriterionReport {
            criterion: format!("Anime must be tagged with {}", demographic),
            satisfied: ctx.anime.demographics.iter().any(|d| d == demographic),
        }
    })
}

pub fn chosen_start_month(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let month = ctx
            .settings
            .param(course, PARAM_MONTH)
            .and_then(|m| m.parse::<u32>().ok());
        let Some(month) = month else {
            return unset(PARAM_MONTH);
        };
        CriterionReport {
            criterion: format!("Anime must start airing in {}", month_name(month)),
            satisfied: month == ctx.anime.aired.from.month,
        }
    })
}

/// Season windows are fixed by first-air month: Winter is January through
/// March, Spring April through June, Summer July through September, Fall
/// October through December.
pub fn chosen_season(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let months: Option<(&str, [u32; 3])> =
            ctx.settings
                .param(course, PARAM_SEASON)
                .and_then(|season| match season {
                    "Winter" => Some((season, [1, 2, 3])),
                    "Spring" => Some((season, [4, 5, 6])),
                    "Summer" => Some((season, [7, 8, 9])),
                    "Fall" => Some((season, [10, 11, 12])),
                    _ => None,
                });
        let Some((season, months)) = months else {
            return unset(PARAM_SEASON);
        };
        CriterionReport {
            criterion: format!("Anime must start airing in {}", season),
            satisfied: months.contains(&ctx.anime.aired.from.month),
        }
    })
}

pub fn chosen_episode_count(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let count = ctx
            .settings
            .param(course, PARAM_EPISODE_COUNT)
            .and_then(|c| c.parse::<u32>().ok());
        let Some(count) = count else {
            return unset(PARAM_EPISODE_COUNT);
        };
        CriterionReport {
            criterion: format!("Anime must have {} episodes", count),
            satisfied: count == ctx.anime.episodes,
        }
    })
}

/// Either of two configured genre/theme tags, case-insensitive over genres
/// and themes. The second tag is optional.
pub fn chosen_genre_theme(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(tag1) = ctx.settings.param(course, PARAM_GENRE_THEME_1) else {
            return unset(PARAM_GENRE_THEME_1);
        };
        let tag2 = ctx.settings.param(course, PARAM_GENRE_THEME_2);
        let criterion = match tag2 {
            Some(tag2) => format!("Anime must be tagged with {}", phrase_list(&[tag1, tag2])),
            None => format!("Anime must be tagged with {}", tag1),
        };
        let mut wanted = vec![tag1];
        if let Some(tag2) = tag2 {
            wanted.push(tag2);
        }
        let satisfied = ctx
            .anime
            .genres
            .iter()
            .chain(ctx.anime.themes.iter())
            .any(|tag| wanted.iter().any(|w| w.eq_ignore_ascii_case(tag)));
        CriterionReport {
            criterion,
            satisfied,
        }
    })
}

/// Either of two configured first-air years. The second year is optional.
pub fn chosen_start_year(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(year1) = ctx.settings.param(course, PARAM_YEAR_1) else {
            return unset(PARAM_YEAR_1);
        };
        let year2 = ctx.settings.param(course, PARAM_YEAR_2);
        let criterion = match year2 {
            Some(year2) => format!(
                "Anime must start airing in {}",
                phrase_list(&[year1, year2])
            ),
            None => format!("Anime must start airing in {}", year1),
        };
        let year = ctx.anime.aired.from.year.to_string();
        CriterionReport {
            criterion,
            satisfied: year == year1 || year2.is_some_and(|y| year == y),
        }
    })
}

pub fn chosen_media_type(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(media_type) = ctx.settings.param(course, PARAM_TYPE) else {
            return unset(PARAM_TYPE);
        };
        CriterionReport {
            criterion: format!("Anime must be of type {}", media_type),
            satisfied: ctx.anime.media_type == media_type,
        }
    })
}

/// Title first letter equality; the `Other` sentinel accepts any
/// non-alphanumeric leading character.
pub fn chosen_first_letter(course: CourseId) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let Some(letter) = ctx.settings.param(course, PARAM_LETTER) else {
            return unset(PARAM_LETTER);
        };
        let first = ctx
            .anime
            .title
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase());
        let satisfied = if letter == LETTER_OTHER {
            first.is_some_and(|c| !c.is_ascii_alphanumeric())
        } else {
            first.is_some_and(|c| letter.chars().next() == Some(c))
        };
        CriterionReport {
            criterion: format!(
                "Anime title must start with {}",
                if letter == LETTER_OTHER {
                    "a symbol"
                } else {
                    letter
                }
            ),
            satisfied,
        }
    })
}

fn unset(name: &str) -> CriterionReport {
    CriterionReport {
        criterion: format!("Course option '{}' must be chosen", name),
        satisfied: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ChallengeEntry, ChallengeId};
    use crate::record::{AiredDate, AnimeRecord};
    use crate::settings::UserSettings;

    fn ctx_parts() -> (AnimeRecord, ChallengeEntry, UserSettings) {
        let mut anime = AnimeRecord {
            mal_id: 1,
            title: "Cowboy Bebop".to_string(),
            media_type: "TV".to_string(),
            episodes: 26,
            demographics: vec!["Seinen".to_string()],
            genres: vec!["Action".to_string()],
            themes: vec!["Space".to_string()],
            studios: vec!["Sunrise".to_string()],
            ..AnimeRecord::default()
        };
        anime.aired.from = AiredDate {
            year: 1998,
            month: 4,
            day: 3,
        };
        anime.aired.day = "Saturdays".to_string();
        let entry = ChallengeEntry::blank(ChallengeId(1), vec![CourseId::Soup]);
        let settings = UserSettings::sample("WatcherOne");
        (anime, entry, settings)
    }

    fn run(rule: Rule, settings: &UserSettings) -> CriterionReport {
        let (anime, entry, _) = ctx_parts();
        let ctx = RuleContext {
            anime: &anime,
            settings,
            entry: &entry,
            course: CourseId::Soup,
        };
        rule(&ctx)
    }

    #[test]
    fn unset_parameter_fails_closed_with_stable_wording() {
        let (_, _, settings) = ctx_parts();
        let report = run(chosen_demographic(CourseId::Soup), &settings);
        assert!(!report.satisfied);
        assert_eq!(report.criterion, "Course option 'Demographic' must be chosen");
    }

    #[test]
    fn configured_demographic_matches() {
        let (_, _, mut settings) = ctx_parts();
        settings.set_param(CourseId::Soup, PARAM_DEMOGRAPHIC, "Seinen");
        let report = run(chosen_demographic(CourseId::Soup), &settings);
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime must be tagged with Seinen");
    }

    #[test]
    fn season_window_contains_first_air_month() {
        let (_, _, mut settings) = ctx_parts();
        settings.set_param(CourseId::Soup, PARAM_SEASON, "Spring");
        assert!(run(chosen_season(CourseId::Soup), &settings).satisfied);
        settings.set_param(CourseId::Soup, PARAM_SEASON, "Winter");
        assert!(!run(chosen_season(CourseId::Soup), &settings).satisfied);
    }

    #[test]
    fn genre_theme_accepts_either_tag_case_insensitive() {
        let (_, _, mut settings) = ctx_parts();
        settings.set_param(CourseId::Soup, PARAM_GENRE_THEME_1, "romance");
        settings.set_param(CourseId::Soup, PARAM_GENRE_THEME_2, "space");
        let report = run(chosen_genre_theme(CourseId::Soup), &settings);
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime must be tagged with romance or space");
    }

    #[test]
    fn start_year_accepts_either_year() {
        let (_, _, mut settings) = ctx_parts();
        settings.set_param(CourseId::Soup, PARAM_YEAR_1, "1997");
        settings.set_param(CourseId::Soup, PARAM_YEAR_2, "1998");
        assert!(run(chosen_start_year(CourseId::Soup), &settings).satisfied);
        settings.set_param(CourseId::Soup, PARAM_YEAR_2, "1999");
        assert!(!run(chosen_start_year(CourseId::Soup), &settings).satisfied);
    }

    #[test]
    fn other_letter_means_non_alphanumeric() {
        let (mut anime, entry, mut settings) = ctx_parts();
        settings.set_param(CourseId::Soup, PARAM_LETTER, LETTER_OTHER);
        anime.title = "86".to_string();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Soup,
        };
        let report = chosen_first_letter(CourseId::Soup)(&ctx);
        assert!(!report.satisfied, "digits are not symbols");

        anime.title = "\"Oshi no Ko\"".to_string();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Soup,
        };
        let report = chosen_first_letter(CourseId::Soup)(&ctx);
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime title must start with a symbol");
    }
}
