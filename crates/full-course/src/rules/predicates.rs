//! Rule factories whose parameters are fixed in the catalog.

use super::{phrase_list, month_name, Cmp, CriterionReport, Rule, RuleContext};
use crate::record::ListStatus;

/// Media type must be one of the allowed values (exact match).
pub fn media_type(allowed: &[&str]) -> Rule {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must be of type {}", phrase_list(&allowed)),
        satisfied: allowed.iter().any(|t| *t == ctx.anime.media_type),
    })
}

pub fn episode_count(count: u32, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have {} {} episodes",
            cmp.quantity_phrase(),
            count
        ),
        satisfied: cmp.holds(ctx.anime.episodes, count),
    })
}

/// Total runtime in minutes, episode duration times episode count.
pub fn runtime(minutes: f64, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let total = ctx.anime.episode_duration_minutes * f64::from(ctx.anime.episodes);
        CriterionReport {
            criterion: format!(
                "Anime must have {} {} minutes of runtime",
                cmp.quantity_phrase(),
                minutes
            ),
            satisfied: cmp.holds(total, minutes),
        }
    })
}

pub fn episode_duration(minutes: f64, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have {} {} minutes per episode",
            cmp.quantity_phrase(),
            minutes
        ),
        satisfied: cmp.holds(ctx.anime.episode_duration_minutes, minutes),
    })
}

/// Lexical comparison of the first air date against a `YYYY-MM-DD` literal.
/// An unknown air date never satisfies the rule.
pub fn start_date(date: &str, cmp: Cmp) -> Rule {
    let date = date.to_string();
    Box::new(move |ctx: &RuleContext<'_>| {
        let phrase = match cmp {
            Cmp::AtLeast | Cmp::Above => "start airing on or after",
            Cmp::AtMost | Cmp::Below => "start airing on or before",
        };
        let satisfied = ctx
            .anime
            .aired
            .from
            .to_iso()
            .is_some_and(|start| cmp.holds(start.as_str(), date.as_str()));
        CriterionReport {
            criterion: format!("Anime must {} {}", phrase, date),
            satisfied,
        }
    })
}

/// Broadcast weekday must be one of the given names (exact match).
pub fn broadcast_day(days: &[&str]) -> Rule {
    let days: Vec<String> = days.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must air on {}", phrase_list(&days)),
        satisfied: days.iter().any(|d| *d == ctx.anime.aired.day),
    })
}

pub fn start_month(months: &[u32]) -> Rule {
    let months: Vec<u32> = months.to_vec();
    Box::new(move |ctx: &RuleContext<'_>| {
        let names: Vec<&str> = months.iter().map(|m| month_name(*m)).collect();
        CriterionReport {
            criterion: format!("Anime must start airing in {}", phrase_list(&names)),
            satisfied: months.contains(&ctx.anime.aired.from.month),
        }
    })
}

/// Title and username must share a first letter, case-insensitive. When the
/// title leads with a non-alphanumeric character any alphanumeric username
/// start counts.
pub fn title_matches_username() -> Rule {
    Box::new(|ctx: &RuleContext<'_>| {
        let criterion = "Username must start with same letter as anime title".to_string();
        let title_first = ctx.anime.title.chars().next();
        let user_first = ctx.settings.username.chars().next();
        let satisfied = match title_first {
            Some(t) if t.is_ascii_alphanumeric() => user_first
                .is_some_and(|u| u.to_ascii_lowercase() == t.to_ascii_lowercase()),
            _ => user_first.is_some_and(|u| u.is_ascii_alphanumeric()),
        };
        CriterionReport {
            criterion,
            satisfied,
        }
    })
}

/// Source material membership, case-insensitive.
pub fn source(sources: &[&str]) -> Rule {
    let sources: Vec<String> = sources.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must be from {}", phrase_list(&sources)),
        satisfied: sources
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&ctx.anime.source)),
    })
}

pub fn rating(ratings: &[&str]) -> Rule {
    let ratings: Vec<String> = ratings.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must have a rating of {}", phrase_list(&ratings)),
        satisfied: ratings.iter().any(|r| *r == ctx.anime.rating),
    })
}

pub fn genre_count(count: usize, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must have {} {} genres", cmp.quantity_phrase(), count),
        satisfied: cmp.holds(ctx.anime.genres.len(), count),
    })
}

/// At least `required` of the listed tags must appear across genres, themes
/// and demographics.
pub fn tags(required_tags: &[&str], required: usize) -> Rule {
    let required_tags: Vec<String> = required_tags.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| {
        let matched = ctx
            .anime
            .tags()
            .filter(|tag| required_tags.iter().any(|t| t == tag))
            .count();
        CriterionReport {
            criterion: format!(
                "Anime must have {} of the following tags: {}",
                required,
                phrase_list(&required_tags)
            ),
            satisfied: matched >= required,
        }
    })
}

/// The series must have finished airing on or before the entry's start date.
/// No start date yet means nothing to check.
pub fn finished_airing() -> Rule {
    Box::new(|ctx: &RuleContext<'_>| {
        let satisfied = if ctx.entry.start_date.is_empty() {
            true
        } else {
            ctx.anime
                .aired
                .to
                .to_iso()
                .is_some_and(|end| end.as_str() <= ctx.entry.start_date.as_str())
        };
        CriterionReport {
            criterion: "Anime must have finished airing before you started it".to_string(),
            satisfied,
        }
    })
}

pub fn song_count_equals(openings: u32, endings: u32) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have {} openings and {} endings",
            openings, endings
        ),
        satisfied: ctx.anime.opening_count == openings && ctx.anime.ending_count == endings,
    })
}

pub fn song_count_at_least(openings: u32, endings: u32) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have at least {} openings or {} endings",
            openings, endings
        ),
        satisfied: ctx.anime.opening_count >= openings || ctx.anime.ending_count >= endings,
    })
}

/// The hour portion of the broadcast time must match one of the given values.
pub fn air_hour(hours: &[&str]) -> Rule {
    let hours: Vec<String> = hours.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| {
        let hour = ctx
            .anime
            .aired
            .time
            .split(':')
            .next()
            .unwrap_or_default();
        CriterionReport {
            criterion: format!(
                "Anime must air in one of the following hours: {}",
                phrase_list(&hours)
            ),
            satisfied: hours.iter().any(|h| h == hour),
        }
    })
}

pub fn main_characters_exactly(count: u32) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must have {} main characters", count),
        satisfied: ctx.anime.main_characters == count,
    })
}

pub fn main_characters_at_least(count: u32) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must have at least {} main characters", count),
        satisfied: ctx.anime.main_characters >= count,
    })
}

pub fn more_main_than_supporting() -> Rule {
    Box::new(|ctx: &RuleContext<'_>| CriterionReport {
        criterion: "Anime must have more main characters than supporting characters".to_string(),
        satisfied: ctx.anime.main_characters > ctx.anime.supporting_characters,
    })
}

/// Popularity is a rank position, so a larger number means less popular.
/// `Above` reads as "lower than N in popularity".
pub fn popularity(position: u32, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let phrase = match cmp {
            Cmp::Above | Cmp::AtLeast => "lower than",
            Cmp::Below | Cmp::AtMost => "higher than",
        };
        CriterionReport {
            criterion: format!("Anime must be {} {} in popularity", phrase, position),
            satisfied: cmp.holds(ctx.anime.popularity, position),
        }
    })
}

pub fn score(value: f64, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let phrase = match cmp {
            Cmp::AtLeast | Cmp::Above => "at or above",
            Cmp::AtMost | Cmp::Below => "at or below",
        };
        CriterionReport {
            criterion: format!("Anime must be {} {} in rating", phrase, value),
            satisfied: cmp.holds(ctx.anime.score, value),
        }
    })
}

/// The decimal rendering of the score must contain one of the fragments.
pub fn score_contains(fragments: &[&str]) -> Rule {
    let fragments: Vec<String> = fragments.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| {
        let rendered = ctx.anime.score.to_string();
        CriterionReport {
            criterion: format!(
                "Anime score must contain one of the following: {}",
                phrase_list(&fragments)
            ),
            satisfied: fragments.iter().any(|f| rendered.contains(f.as_str())),
        }
    })
}

pub fn favorites(count: u64, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have {} {} favorites",
            cmp.quantity_phrase(),
            count
        ),
        satisfied: cmp.holds(ctx.anime.favorites, count),
    })
}

/// Absolute difference between ranking and popularity positions.
pub fn rank_popularity_gap(diff: u32, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let gap = ctx.anime.rank.abs_diff(ctx.anime.popularity);
        CriterionReport {
            criterion: format!(
                "Anime must have a ranking/popularity difference of {} {}",
                cmp.quantity_phrase(),
                diff
            ),
            satisfied: cmp.holds(gap, diff),
        }
    })
}

pub fn mal_id_contains(fragment: &str) -> Rule {
    let fragment = fragment.to_string();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must have MAL ID containing {}", fragment),
        satisfied: ctx.anime.mal_id.to_string().contains(&fragment),
    })
}

/// At least `count` words of the title must start with the same letter.
/// Words without any ASCII letter are skipped.
pub fn words_with_same_letter(count: usize) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let mut per_letter = std::collections::BTreeMap::new();
        for word in ctx.anime.title.to_lowercase().split(' ') {
            if !word.chars().any(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if let Some(first) = word.chars().next() {
                *per_letter.entry(first).or_insert(0usize) += 1;
            }
        }
        CriterionReport {
            criterion: format!(
                "Anime must have at least {} words starting with the same letter",
                count
            ),
            satisfied: per_letter.values().any(|c| *c >= count),
        }
    })
}

/// Title must start with one of the uppercase letters; `other` widens the
/// rule to any character outside A-Z.
pub fn title_starts_with(letters: &[&str], other: bool) -> Rule {
    let letters: Vec<String> = letters.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| {
        let mut options = letters.clone();
        if other {
            options.push("a number/symbol".to_string());
        }
        let first = ctx
            .anime
            .title
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase());
        let satisfied = first.is_some_and(|c| {
            letters.iter().any(|l| l.chars().next() == Some(c))
                || (other && !c.is_ascii_uppercase())
        });
        CriterionReport {
            criterion: format!("Anime title must start with {}", phrase_list(&options)),
            satisfied,
        }
    })
}

/// Any licensor, producer or studio name starting with one of the letters
/// satisfies the rule; `other` widens to characters outside A-Z.
pub fn company_starts_with(letters: &[&str], other: bool) -> Rule {
    let letters: Vec<String> = letters.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| {
        let mut options = letters.clone();
        if other {
            options.push("a number/symbol".to_string());
        }
        let satisfied = ctx.anime.companies().any(|company| {
            company
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .is_some_and(|c| {
                    letters.iter().any(|l| l.chars().next() == Some(c))
                        || (other && !c.is_ascii_uppercase())
                })
        });
        CriterionReport {
            criterion: format!(
                "A Licensor/Producer/Studio must start with {}",
                phrase_list(&options)
            ),
            satisfied,
        }
    })
}

/// Exact-name membership across licensors, producers and studios.
pub fn company(companies: &[&str]) -> Rule {
    let companies: Vec<String> = companies.iter().map(|s| s.to_string()).collect();
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!("Anime must be from one of: {}", phrase_list(&companies)),
        satisfied: companies
            .iter()
            .any(|wanted| ctx.anime.companies().any(|c| c == wanted)),
    })
}

/// Some studio or producer must start with a letter found in the username.
pub fn company_initial_in_username() -> Rule {
    Box::new(|ctx: &RuleContext<'_>| {
        let username = ctx.settings.username.to_uppercase();
        let satisfied = ctx
            .anime
            .studios
            .iter()
            .chain(ctx.anime.producers.iter())
            .filter_map(|c| c.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .any(|c| username.contains(c));
        CriterionReport {
            criterion:
                "Anime must be made by a studio/producer which starts with a letter in your username."
                    .to_string(),
            satisfied,
        }
    })
}

/// Member count in one list-status bucket, strictly above or below.
pub fn list_status_members(status: ListStatus, count: u64, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| CriterionReport {
        criterion: format!(
            "Anime must have {} {} {} members",
            cmp.quantity_phrase(),
            count,
            status.label()
        ),
        satisfied: cmp.holds(ctx.anime.statistics.count(status), count),
    })
}

/// Distinct characters in the title that are not ASCII alphanumerics or
/// spaces.
pub fn title_symbol_count(count: usize, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let distinct: std::collections::BTreeSet<char> = ctx
            .anime
            .title
            .chars()
            .filter(|c| !c.is_ascii_alphanumeric() && *c != ' ')
            .collect();
        CriterionReport {
            criterion: format!(
                "Anime title must have {} {} different non-alphanumeric characters",
                cmp.quantity_phrase(),
                count
            ),
            satisfied: cmp.holds(distinct.len(), count),
        }
    })
}

/// Distinct uppercase characters shared between the title and the username.
pub fn title_shares_with_username(count: usize, cmp: Cmp) -> Rule {
    Box::new(move |ctx: &RuleContext<'_>| {
        let username = ctx.settings.username.to_uppercase();
        let distinct: std::collections::BTreeSet<char> =
            ctx.anime.title.to_uppercase().chars().collect();
        let shared = distinct.iter().filter(|c| username.contains(**c)).count();
        CriterionReport {
            criterion: format!(
                "Anime title must have {} {} shared characters",
                cmp.quantity_phrase(),
                count
            ),
            satisfied: cmp.holds(shared, count),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseId;
    use crate::entry::{ChallengeEntry, ChallengeId};
    use crate::record::{AiredDate, AnimeRecord};
    use crate::settings::UserSettings;

    fn sample_record() -> AnimeRecord {
        AnimeRecord {
            mal_id: 5114,
            title: "Fullmetal Alchemist: Brotherhood".to_string(),
            media_type: "TV".to_string(),
            source: "Manga".to_string(),
            episodes: 64,
            episode_duration_minutes: 24.0,
            score: 9.1,
            rank: 1,
            popularity: 3,
            favorites: 220_000,
            genres: vec!["Action".to_string(), "Adventure".to_string()],
            themes: vec!["Military".to_string()],
            demographics: vec!["Shounen".to_string()],
            studios: vec!["Bones".to_string()],
            producers: vec!["Aniplex".to_string()],
            licensors: vec!["Funimation".to_string()],
            opening_count: 5,
            ending_count: 5,
            main_characters: 2,
            supporting_characters: 60,
            rating: "R - 17+ (violence & profanity)".to_string(),
            ..AnimeRecord::default()
        }
    }

    fn sample_entry() -> ChallengeEntry {
        ChallengeEntry::blank(ChallengeId(1), vec![CourseId::Burger])
    }

    fn sample_settings() -> UserSettings {
        UserSettings::sample("WatcherOne")
    }

    fn check(rule: &Rule) -> CriterionReport {
        let anime = sample_record();
        let entry = sample_entry();
        let settings = sample_settings();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        rule(&ctx)
    }

    #[test]
    fn episode_count_boundary_is_inclusive() {
        let report = check(&episode_count(64, Cmp::AtLeast));
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime must have at least 64 episodes");

        let report = check(&episode_count(65, Cmp::AtLeast));
        assert!(!report.satisfied);
    }

    #[test]
    fn score_threshold_embeds_value() {
        let report = check(&score(7.0, Cmp::AtLeast));
        assert!(report.satisfied);
        assert_eq!(report.criterion, "Anime must be at or above 7 in rating");

        let report = check(&score(7.5, Cmp::AtMost));
        assert!(!report.satisfied);
        assert_eq!(report.criterion, "Anime must be at or below 7.5 in rating");
    }

    #[test]
    fn runtime_multiplies_duration_by_episodes() {
        // 64 * 24 = 1536 minutes.
        assert!(check(&runtime(1536.0, Cmp::AtLeast)).satisfied);
        assert!(!check(&runtime(1537.0, Cmp::AtLeast)).satisfied);
    }

    #[test]
    fn media_type_lists_options_in_criterion() {
        let report = check(&media_type(&["Movie", "OVA"]));
        assert!(!report.satisfied);
        assert_eq!(report.criterion, "Anime must be of type Movie or OVA");
    }

    #[test]
    fn unknown_air_date_fails_start_date_rule() {
        let report = check(&start_date("2000-01-01", Cmp::AtLeast));
        assert!(!report.satisfied);
    }

    #[test]
    fn start_date_compares_lexically_on_padded_dates() {
        let mut anime = sample_record();
        anime.aired.from = AiredDate {
            year: 2026,
            month: 1,
            day: 9,
        };
        let entry = sample_entry();
        let settings = sample_settings();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(start_date("2026-01-09", Cmp::AtLeast)(&ctx).satisfied);
        assert!(start_date("2026-01-10", Cmp::AtLeast)(&ctx).satisfied == false);
        assert!(start_date("2026-01-09", Cmp::AtMost)(&ctx).satisfied);
    }

    #[test]
    fn tags_counts_across_genres_themes_and_demographics() {
        let rule = tags(&["Action", "Military", "Shounen"], 3);
        assert!(check(&rule).satisfied);
        let rule = tags(&["Action", "Romance"], 2);
        assert!(!check(&rule).satisfied);
    }

    #[test]
    fn finished_airing_passes_without_start_date() {
        assert!(check(&finished_airing()).satisfied);
    }

    #[test]
    fn finished_airing_requires_end_before_start() {
        let mut anime = sample_record();
        anime.aired.to = AiredDate {
            year: 2026,
            month: 6,
            day: 1,
        };
        let mut entry = sample_entry();
        entry.start_date = "2026-05-01".to_string();
        let settings = sample_settings();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(!finished_airing()(&ctx).satisfied);

        let mut entry = sample_entry();
        entry.start_date = "2026-07-01".to_string();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(finished_airing()(&ctx).satisfied);
    }

    #[test]
    fn title_starts_with_other_accepts_symbols() {
        let mut anime = sample_record();
        anime.title = "86".to_string();
        let entry = sample_entry();
        let settings = sample_settings();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(title_starts_with(&["A", "B"], true)(&ctx).satisfied);
        let report = title_starts_with(&["A", "B"], false)(&ctx);
        assert!(!report.satisfied);
        assert_eq!(report.criterion, "Anime title must start with A or B");
    }

    #[test]
    fn company_scans_licensors_producers_and_studios() {
        assert!(check(&company(&["Bones"])).satisfied);
        assert!(check(&company(&["Funimation"])).satisfied);
        assert!(!check(&company(&["Madhouse"])).satisfied);
    }

    #[test]
    fn company_initial_in_username_matches_studio_letter() {
        // "Bones" starts with B, sample username lacks B until we change it.
        let anime = sample_record();
        let entry = sample_entry();
        let mut settings = sample_settings();
        settings.username = "xyz".to_string();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(!company_initial_in_username()(&ctx).satisfied);
        settings.username = "bassline".to_string();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(company_initial_in_username()(&ctx).satisfied);
    }

    #[test]
    fn title_symbol_count_ignores_alphanumerics_and_spaces() {
        // Distinct symbols in the sample title: ':' only.
        assert!(check(&title_symbol_count(1, Cmp::AtLeast)).satisfied);
        assert!(!check(&title_symbol_count(2, Cmp::AtLeast)).satisfied);
    }

    #[test]
    fn words_with_same_letter_skips_letterless_words() {
        let mut anime = sample_record();
        anime.title = "Aria the Animation & 86".to_string();
        let entry = sample_entry();
        let settings = sample_settings();
        let ctx = RuleContext {
            anime: &anime,
            settings: &settings,
            entry: &entry,
            course: CourseId::Burger,
        };
        assert!(words_with_same_letter(2)(&ctx).satisfied);
        assert!(!words_with_same_letter(3)(&ctx).satisfied);
    }
}
