//! The course table. Order matches [`CourseId::ALL`].

use super::{CourseSpec, ParamKind, ParamSpec};
use crate::course::CourseId;
use crate::rules::{self, Cmp};

fn select(name: &'static str, values: &[&str]) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Select(values.iter().map(|v| v.to_string()).collect()),
    }
}

fn text(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Text,
    }
}

const WEEKDAYS: [&str; 7] = [
    "Mondays",
    "Tuesdays",
    "Wednesdays",
    "Thursdays",
    "Fridays",
    "Saturdays",
    "Sundays",
];

pub(super) fn build() -> Vec<CourseSpec> {
    vec![
        // Drinks
        CourseSpec {
            label: "AIRED SAME DAY",
            required_challenges: 5,
            extra_info: &[],
            rules: vec![rules::chosen_broadcast_day(CourseId::Coffee)],
            manual_criteria: &[],
            params: vec![select(rules::PARAM_DAY, &WEEKDAYS)],
        },
        CourseSpec {
            label: "MAL/ANIME+ RECS",
            required_challenges: 5,
            extra_info: &["MAL/Anime+ Screenshot:"],
            rules: vec![],
            manual_criteria: &["Anime recommended by MAL or Anime+"],
            params: vec![],
        },
        CourseSpec {
            label: "SAME LICENSOR/PRODUCER/STUDIO",
            required_challenges: 5,
            extra_info: &[],
            rules: vec![rules::chosen_company(CourseId::Soda)],
            manual_criteria: &[],
            params: vec![text(rules::PARAM_COMPANY)],
        },
        CourseSpec {
            label: "TITLE 5+ WORDS",
            required_challenges: 5,
            extra_info: &[],
            rules: vec![],
            manual_criteria: &["Anime title has >=5 words"],
            params: vec![],
        },
        // Starters
        CourseSpec {
            label: "SAME DEMOGRAPHIC",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![rules::chosen_demographic(CourseId::Soup)],
            manual_criteria: &[],
            params: vec![select(
                rules::PARAM_DEMOGRAPHIC,
                &["Josei", "Kids", "Seinen", "Shoujo", "Shounen"],
            )],
        },
        CourseSpec {
            label: "MEAN SCORE 7.50 OR LESS",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![rules::score(7.5, Cmp::AtMost)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "EPISODE DURATION OF 23 MINS OR MORE",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![rules::episode_duration(23.0, Cmp::AtLeast)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "AIRED IN SAME MONTH",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![rules::chosen_start_month(CourseId::SpringRolls)],
            manual_criteria: &[],
            params: vec![select(
                rules::PARAM_MONTH,
                &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"],
            )],
        },
        CourseSpec {
            label: "STARTED AIRING BETWEEN 2000 AND 2009",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![
                rules::start_date("2000-01-01", Cmp::AtLeast),
                rules::start_date("2009-12-31", Cmp::AtMost),
            ],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "TV-TYPE ONLY",
            required_challenges: 20,
            extra_info: &[],
            rules: vec![rules::media_type(&["TV"])],
            manual_criteria: &[],
            params: vec![],
        },
        // Mains
        CourseSpec {
            label: "MEAN SCORE OF 7.00 OR GREATER",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::score(7.0, Cmp::AtLeast)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "NON-ALPHANUMERIC CHARACTER IN MAIN TITLE",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::title_symbol_count(1, Cmp::AtLeast)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "PG-13 RATING",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::rating(&["PG-13 - Teens 13 or older"])],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "3+ HOURS WATCH TIME",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::runtime(180.0, Cmp::AtLeast)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "STARTED AIRING SAME SEASON",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::chosen_season(CourseId::Lasagna)],
            manual_criteria: &[],
            params: vec![select(
                rules::PARAM_SEASON,
                &["Winter", "Spring", "Summer", "Fall"],
            )],
        },
        CourseSpec {
            label: "SAME NUMBER OF EPISODES",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::chosen_episode_count(CourseId::Sandwich)],
            manual_criteria: &[],
            params: vec![text(rules::PARAM_EPISODE_COUNT)],
        },
        CourseSpec {
            label: "STARTED AIRING BETWEEN 2021 and 2026",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![
                rules::start_date("2021-01-01", Cmp::AtLeast),
                rules::start_date("2026-12-10", Cmp::AtMost),
            ],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "SHARED GENRE/THEME",
            required_challenges: 25,
            extra_info: &[],
            rules: vec![rules::chosen_genre_theme(CourseId::FishAndChips)],
            manual_criteria: &[],
            params: vec![
                text(rules::PARAM_GENRE_THEME_1),
                text(rules::PARAM_GENRE_THEME_2),
            ],
        },
        // Sides
        CourseSpec {
            label: "SHARED STAFF",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![],
            manual_criteria: &["Anime shares a staff member with other sides"],
            params: vec![text("Staff #1"), text("Staff #2")],
        },
        CourseSpec {
            label: "15 MINUTE OR LESS EPISODES",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![rules::episode_duration(15.0, Cmp::AtMost)],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "SHIRITORI CHAIN",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![],
            manual_criteria: &["Anime valid for shiritori chain"],
            params: vec![],
        },
        CourseSpec {
            label: "R-17/R+/Rx RATING",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![rules::rating(&[
                "R - 17+ (violence & profanity)",
                "R+ - Mild Nudity",
                "Rx - Hentai",
            ])],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "STARTED AIRING BETWEEN 2011 AND 2020",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![
                rules::start_date("2011-01-01", Cmp::AtLeast),
                rules::start_date("2020-12-31", Cmp::AtMost),
            ],
            manual_criteria: &[],
            params: vec![],
        },
        CourseSpec {
            label: "MOVIES ONLY",
            required_challenges: 15,
            extra_info: &[],
            rules: vec![rules::media_type(&["Movie"])],
            manual_criteria: &[],
            params: vec![],
        },
        // Desserts
        CourseSpec {
            label: "STARTED AIRING SAME YEAR",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![rules::chosen_start_year(CourseId::Cake)],
            manual_criteria: &[],
            params: vec![text(rules::PARAM_YEAR_1), text(rules::PARAM_YEAR_2)],
        },
        CourseSpec {
            label: "SAME TYPE",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![rules::chosen_media_type(CourseId::IceCream)],
            manual_criteria: &[],
            params: vec![select(
                rules::PARAM_TYPE,
                &[
                    "TV",
                    "OVA",
                    "Movie",
                    "Special",
                    "ONA",
                    "Music",
                    "TV Special",
                    "PV",
                    "CM",
                ],
            )],
        },
        CourseSpec {
            label: "MAIN TITLE 5 WORDS OR LESS",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![],
            manual_criteria: &["Anime title has <=5 words"],
            params: vec![],
        },
        CourseSpec {
            label: "MAIN TITLE STARTS WITH SAME LETTER",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![rules::chosen_first_letter(CourseId::ApplePie)],
            manual_criteria: &[],
            params: vec![ParamSpec {
                name: rules::PARAM_LETTER,
                kind: ParamKind::Select(letter_values()),
            }],
        },
        CourseSpec {
            label: "MC WITH UNNATURAL HAIR COLOR",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![],
            manual_criteria: &["Anime has main character with blue, green, pink, or purple hair"],
            params: vec![],
        },
        CourseSpec {
            label: "STARTED AIRING 1999 OR EARLIER",
            required_challenges: 10,
            extra_info: &[],
            rules: vec![rules::start_date("1999-12-31", Cmp::AtMost)],
            manual_criteria: &[],
            params: vec![],
        },
    ]
}

/// A through Z, 0 through 9, then the `Other` sentinel.
fn letter_values() -> Vec<String> {
    let mut values: Vec<String> = (b'A'..=b'Z').map(|c| (c as char).to_string()).collect();
    values.extend((0..10).map(|n: u8| n.to_string()));
    values.push(rules::LETTER_OTHER.to_string());
    values
}
