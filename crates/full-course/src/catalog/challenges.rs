//! The 192-challenge table. Descriptions keep the original numbering so
//! reports can be cross-checked against the published challenge list.

use std::collections::BTreeMap;

use super::ChallengeSpec;
use crate::course::CourseId::{self, *};
use crate::entry::ChallengeId;
use crate::record::ListStatus;
use crate::rules::{self, Cmp, Rule};

#[allow(clippy::too_many_arguments)]
fn add(
    map: &mut BTreeMap<ChallengeId, ChallengeSpec>,
    id: u16,
    description: &'static str,
    extra_info: &'static [&'static str],
    courses: &'static [CourseId],
    rules: Vec<Rule>,
    manual_criteria: &'static [&'static str],
) {
    map.insert(
        ChallengeId(id),
        ChallengeSpec {
            description,
            extra_info,
            courses,
            rules,
            manual_criteria,
        },
    );
}

pub(super) fn build() -> BTreeMap<ChallengeId, ChallengeSpec> {
    let mut map = BTreeMap::new();

    add(
        &mut map,
        1,
        "(1) Watch an anime an active MAL Staff Member (not AWC Staff) has listed in their 'MAL Score vs Anime Score' profile statistics",
        &["MAL Staff:", "Screenshot:"],
        &[Burger, Lasagna, Pizza],
        vec![],
        &["Active MAL staff member has anime listed in 'MAL Score vs Anime Score'"],
    );
    add(
        &mut map,
        2,
        "(2) Watch an anime from a Stack provided by an active AWC Staff Member",
        &["AWC Staff Stack:"],
        &[ChickenWings, Gyoza],
        vec![],
        &["Anime in one of the listed stacks"],
    );
    add(
        &mut map,
        3,
        "(3) Watch an anime after an AWC Staff Member has completed and rated it 8.00 or higher",
        &["AWC Staff:"],
        &[Burger, FishAndChips, Omurice, Spaghetti, Sushi],
        vec![],
        &[
            "Anime completed by AWC Staff Member prior to starting",
            "Anime rated >= 8.00 by AWC Staff Member",
        ],
    );
    add(
        &mut map,
        4,
        "(4) Watch an anime recommended to you in the AWC 2026 Staff Recs thread by an active AWC Staff Member",
        &["Staff Rec Link:"],
        &[ApplePie, IceCream, Milkshake],
        vec![],
        &["Anime recommended to you in AWC 2026 Staff Recs"],
    );
    add(
        &mut map,
        5,
        "(5) Watch an anime recommended to you in the AWC 2026 Participant Recs thread",
        &["Participant Rec Link:"],
        &[GarlicBread, Onigiri, TheMelon, Tofu],
        vec![],
        &["Anime recommended to you in AWC 2026 Participant Recs"],
    );
    add(
        &mut map,
        6,
        "(6) Watch an anime after a 2026 participant with a sign-up post on page 1-3 completed and rated it 9.00 or higher",
        &[
            "Participant:",
            "Link to Their Post:",
            "Link to Their Completed List:",
        ],
        &[FishAndChips, Lasagna, Omurice, Sandwich],
        vec![],
        &[
            "Anime completed by participant prior to starting",
            "Anime rated >= 9.00 by participant",
            "Participant on page 1-3 of the sign-up post",
        ],
    );
    add(
        &mut map,
        7,
        "(7) Watch an anime after a 2026 participant has completed it for the current challenge",
        &["Participant:", "Item Used For:", "Link to Their Post:"],
        &[GarlicBread, Onigiri],
        vec![],
        &["Anime completed by participant prior to starting"],
    );
    add(
        &mut map,
        8,
        "(8) Watch an anime after a 2026 participant watched 1 or more eps and dropped or put it on-hold September 30, 2025 or earlier",
        &[
            "AWC Participant:",
            "Their Post Link:",
            "Screenshot of Their Dropped/On-Hold:",
        ],
        &[ChickenWings, Gyoza, Soup, SpringRolls],
        vec![],
        &["Anime dropped/put on-hold prior to September 30, 2025"],
    );
    add(
        &mut map,
        9,
        "(9) Watch an anime featured in a 2026 participant's forum avatar or signature",
        &["Participant:", "Link to Their Post:"],
        &[Burger, Sushi],
        vec![],
        &["Character from avatar or signature appears in the anime"],
    );
    add(
        &mut map,
        10,
        "(10) Watch an anime a 2026 participant has listed in their 'Popularity vs Anime Score' profile statistics and provide a screenshot",
        &["Participant:", "Their Post Link:", "Screenshot:"],
        &[ChickenWings],
        vec![],
        &["Participant has anime listed in 'Popularity vs Anime Score'"],
    );
    add(
        &mut map,
        11,
        "(11) Watch a TV-type anime with an episode duration of 25 minutes or more",
        &[],
        &[Lasagna, Pizza],
        vec![
            rules::media_type(&["TV"]),
            rules::episode_duration(25.0, Cmp::AtLeast),
        ],
        &[],
    );
    add(
        &mut map,
        12,
        "(12) Watch an ONA, OVA, or Special that has 10+ episodes",
        &[],
        &[Salad, Soup],
        vec![
            rules::media_type(&["ONA", "OVA", "Special"]),
            rules::episode_count(10, Cmp::AtLeast),
        ],
        &[],
    );
    add(
        &mut map,
        13,
        "(13) Watch a Movie with a total duration of 1 hour 30 minutes or more",
        &[],
        &[Cake, Cookie],
        vec![
            rules::media_type(&["Movie"]),
            rules::runtime(90.0, Cmp::AtLeast),
        ],
        &[],
    );
    add(
        &mut map,
        14,
        "(14) Watch a TV-type anime with an irregular release schedule (an ep released more than/less than 7 days after its previous ep)",
        &[],
        &[GarlicBread, TheMelon],
        vec![rules::media_type(&["TV"])],
        &["Anime has an irregular release schedule"],
    );
    add(
        &mut map,
        15,
        "(15) Watch an anime with 2 to 6 episodes",
        &[],
        &[Fries, GarlicBread, TheMelon],
        vec![
            rules::episode_count(2, Cmp::AtLeast),
            rules::episode_count(6, Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        16,
        "(16) Watch an anime with 10 or more episodes",
        &[],
        &[Burger, Lasagna, Omurice, Spaghetti, Sushi],
        vec![rules::episode_count(10, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        17,
        "(17) Watch an anime with 17 or more episodes",
        &[],
        &[Burger, FishAndChips, Lasagna, Omurice, Pizza],
        vec![rules::episode_count(17, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        18,
        "(18) Watch an anime with 26 or more episodes",
        &[],
        &[Cake, Dango],
        vec![rules::episode_count(26, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        19,
        "(19) Watch an anime with 40 or more episodes",
        &[],
        &[ChickenWings, Gyoza, Prawns],
        vec![rules::episode_count(40, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        20,
        "(20) Watch an anime with 52 or more episodes",
        &[],
        &[ChickenWings, Salad],
        vec![rules::episode_count(52, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        21,
        "(21) Watch a TV-type anime with a direct Sequel listed under Related Entries",
        &[],
        &[FishAndChips, Omurice, Pizza, Spaghetti],
        vec![rules::media_type(&["TV"])],
        &["Sequel for this anime is used in item 22"],
    );
    add(
        &mut map,
        22,
        "(22) Watch a Sequel (any anime type) to the anime used for Item (21)",
        &[],
        &[FishAndChips, Omurice, Pizza, Spaghetti],
        vec![],
        &["This anime is a sequel to the anime used in item 21"],
    );
    add(
        &mut map,
        23,
        "(23) Watch an anime that began airing between Jan 1, 2020 and Dec 31, 2025",
        &[],
        &[Burger, FishAndChips, Pizza, Sandwich, Sushi],
        vec![
            rules::start_date("2020-01-01", Cmp::AtLeast),
            rules::start_date("2025-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        24,
        "(24) Watch an anime that began airing between Jan 1, 2015 and Dec 31, 2019",
        &[],
        &[Fries, GarlicBread, Onigiri, OnionRings, Tofu],
        vec![
            rules::start_date("2015-01-01", Cmp::AtLeast),
            rules::start_date("2019-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        25,
        "(25) Watch an anime that began airing between Jan 1, 2010 and Dec 31, 2014",
        &[],
        &[Burger, FishAndChips, Lasagna, Spaghetti, Sushi],
        vec![
            rules::start_date("2010-01-01", Cmp::AtLeast),
            rules::start_date("2014-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        26,
        "(26) Watch an anime that began airing between Jan 1, 2000 and Dec 31, 2009",
        &[],
        &[Cookie, Milkshake],
        vec![
            rules::start_date("2000-01-01", Cmp::AtLeast),
            rules::start_date("2009-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        27,
        "(27) Watch an anime that began airing between Jan 1, 1990 and Dec 31, 1999",
        &[],
        &[OnionRings, Tofu],
        vec![
            rules::start_date("1990-01-01", Cmp::AtLeast),
            rules::start_date("1999-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        28,
        "(28) Watch an anime that began airing between Jan 1, 1960 and Dec 31, 1989",
        &[],
        &[Gyoza, Salad, SpringRolls],
        vec![
            rules::start_date("1960-01-01", Cmp::AtLeast),
            rules::start_date("1989-12-31", Cmp::AtMost),
        ],
        &[],
    );
    add(
        &mut map,
        29,
        "(29) Watch an anime that started airing on a Monday",
        &[],
        &[FishAndChips, Omurice, Pizza, Sandwich, Sushi],
        vec![rules::broadcast_day(&["Mondays"])],
        &[],
    );
    add(
        &mut map,
        30,
        "(30) Watch an anime that started airing on a Tuesday",
        &[],
        &[Fries, GarlicBread, OnionRings],
        vec![rules::broadcast_day(&["Tuesdays"])],
        &[],
    );
    add(
        &mut map,
        31,
        "(31) Watch an anime that started airing on a Wednesday",
        &[],
        &[ApplePie, Cake, Dango],
        vec![rules::broadcast_day(&["Wednesdays"])],
        &[],
    );
    add(
        &mut map,
        32,
        "(32) Watch an anime that started airing on a Thursday",
        &[],
        &[Salad],
        vec![rules::broadcast_day(&["Thursdays"])],
        &[],
    );
    add(
        &mut map,
        33,
        "(33) Watch an anime that started airing on a Friday",
        &[],
        &[ChickenWings, Prawns, Soup],
        vec![rules::broadcast_day(&["Fridays"])],
        &[],
    );
    add(
        &mut map,
        34,
        "(34) Watch an anime that started airing on a Saturday",
        &[],
        &[Burger, FishAndChips, Lasagna, Omurice],
        vec![rules::broadcast_day(&["Saturdays"])],
        &[],
    );
    add(
        &mut map,
        35,
        "(35) Watch an anime that started airing on a Sunday",
        &[],
        &[Fries, GarlicBread],
        vec![rules::broadcast_day(&["Sundays"])],
        &[],
    );
    add(
        &mut map,
        36,
        "(36) Watch an anime that started airing in January",
        &[],
        &[Omurice, Pizza, Sushi],
        vec![rules::start_month(&[1])],
        &[],
    );
    add(
        &mut map,
        37,
        "(37) Watch an anime that started airing in February",
        &[],
        &[Gyoza, Salad],
        vec![rules::start_month(&[2])],
        &[],
    );
    add(
        &mut map,
        38,
        "(38) Watch an anime that started airing in March",
        &[],
        &[Onigiri, OnionRings, Tofu],
        vec![rules::start_month(&[3])],
        &[],
    );
    add(
        &mut map,
        39,
        "(39) Watch an anime that started airing in April",
        &[],
        &[Prawns, Salad, Soup],
        vec![rules::start_month(&[4])],
        &[],
    );
    add(
        &mut map,
        40,
        "(40) Watch an anime that started airing in May",
        &[],
        &[IceCream],
        vec![rules::start_month(&[5])],
        &[],
    );
    add(
        &mut map,
        41,
        "(41) Watch an anime that started airing in June",
        &[],
        &[Milkshake],
        vec![rules::start_month(&[6])],
        &[],
    );
    add(
        &mut map,
        42,
        "(42) Watch an anime that started airing in July",
        &[],
        &[Fries, Onigiri, OnionRings, TheMelon, Tofu],
        vec![rules::start_month(&[7])],
        &[],
    );
    add(
        &mut map,
        43,
        "(43) Watch an anime that started airing in August",
        &[],
        &[Prawns, Soup],
        vec![rules::start_month(&[8])],
        &[],
    );
    add(
        &mut map,
        44,
        "(44) Watch an anime that started airing in September",
        &[],
        &[Gyoza],
        vec![rules::start_month(&[9])],
        &[],
    );
    add(
        &mut map,
        45,
        "(45) Watch an anime that started airing in October",
        &[],
        &[Burger, FishAndChips, Omurice, Sandwich],
        vec![rules::start_month(&[10])],
        &[],
    );
    add(
        &mut map,
        46,
        "(46) Watch an anime that started airing in November",
        &[],
        &[Sandwich, Spaghetti],
        vec![rules::start_month(&[11])],
        &[],
    );
    add(
        &mut map,
        47,
        "(47) Watch an anime that started airing in December",
        &[],
        &[FishAndChips, Omurice, Spaghetti, Sushi],
        vec![rules::start_month(&[12])],
        &[],
    );
    add(
        &mut map,
        48,
        "(48) Watch an anime that began airing the same year you joined MAL",
        &["Join Year:"],
        &[ChickenWings, Gyoza, Soup],
        vec![],
        &["Anime began airing the same year you joined MAL"],
    );
    add(
        &mut map,
        49,
        "(49) Watch an anime that began airing the same month (eg. July) you joined MAL",
        &["Join Month:"],
        &[Dango],
        vec![],
        &["Anime began airing the same month you joined MAL"],
    );
    add(
        &mut map,
        50,
        "(50) Watch an anime that began airing the same day (eg. 18th) you joined MAL",
        &["Join Day:"],
        &[FishAndChips, Sandwich, Spaghetti, Sushi],
        vec![],
        &["Anime began airing the same day you joined MAL"],
    );
    add(
        &mut map,
        51,
        "(51) Watch an anime that has a main title starting with the same letter/number/character as your MAL username",
        &[],
        &[Lasagna, Sandwich],
        vec![rules::title_matches_username()],
        &[],
    );
    add(
        &mut map,
        52,
        "(52) Watch an anime with 7 or more words (not symbols and numbers) in the main title",
        &[],
        &[ChickenWings, Prawns, Soup, SpringRolls],
        vec![],
        &["Anime has 7 or more words in the title"],
    );
    add(
        &mut map,
        53,
        "(53) Watch an anime that contains an English number (9, five) somewhere in the main title",
        &[],
        &[Fries, Onigiri, OnionRings, Tofu],
        vec![],
        &["Anime contains an English number in the title"],
    );
    add(
        &mut map,
        54,
        "(54) Watch an anime that has a one-word main title",
        &[],
        &[Gyoza, Prawns, Salad, SpringRolls],
        vec![],
        &["Anime has a one-word title"],
    );
    add(
        &mut map,
        55,
        "(55) Watch an anime that has a main character's name/nickname/alternative name in the main title",
        &["Character:"],
        &[Cake, Milkshake],
        vec![],
        &["Anime has main character's name in the title"],
    );
    add(
        &mut map,
        56,
        "(56) Watch an anime with at least two different non-alphanumeric characters in the main title",
        &[],
        &[Burger, FishAndChips, Omurice, Pizza, Spaghetti],
        vec![rules::title_symbol_count(2, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        57,
        "(57) Watch an anime that has 3 or more words in the main title starting with the same letter",
        &[],
        &[Fries, GarlicBread],
        vec![rules::words_with_same_letter(3)],
        &[],
    );
    add(
        &mut map,
        58,
        "(58) Watch an anime that uses an English or Japanese color in the main title",
        &["Color Used:"],
        &[Lasagna, Pizza, Spaghetti],
        vec![],
        &["Anime uses an English or Japanese color in title"],
    );
    add(
        &mut map,
        59,
        "(59) Watch an anime that uses an English or Japanese animal in the main title",
        &["Animal Used:"],
        &[Salad],
        vec![],
        &["Anime uses an English or Japanese animal in title"],
    );
    add(
        &mut map,
        60,
        "(60) Watch an anime that has a non-Japanese main title",
        &[],
        &[Cookie, Dango],
        vec![],
        &["Anime has a non-Japanese title"],
    );
    add(
        &mut map,
        61,
        "(61) Watch an anime with a main title that shares at least three different letters/numbers/symbols with your MAL username",
        &[],
        &[Burger, Pizza, Sandwich, Spaghetti],
        vec![rules::title_shares_with_username(3, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        62,
        "(62) Watch an anime that has a main title starting with S or Z",
        &[],
        &[Burger, Omurice, Pizza, Sandwich, Spaghetti],
        vec![rules::title_starts_with(&["S", "Z"], false)],
        &[],
    );
    add(
        &mut map,
        63,
        "(63) Watch an anime that has a main title starting with A, G, or N",
        &[],
        &[Burger, Lasagna, Omurice, Pizza],
        vec![rules::title_starts_with(&["A", "G", "N"], false)],
        &[],
    );
    add(
        &mut map,
        64,
        "(64) Watch an anime that has a main title starting with C, D, or O",
        &[],
        &[Fries, GarlicBread, Onigiri, TheMelon, Tofu],
        vec![rules::title_starts_with(&["C", "D", "O"], false)],
        &[],
    );
    add(
        &mut map,
        65,
        "(65) Watch an anime that has a main title starting with F, I, or M",
        &[],
        &[Dango, IceCream],
        vec![rules::title_starts_with(&["F", "I", "M"], false)],
        &[],
    );
    add(
        &mut map,
        66,
        "(66) Watch an anime that has a main title starting with B, J, P, or U",
        &[],
        &[Fries, Onigiri, Tofu],
        vec![rules::title_starts_with(&["B", "J", "P", "U"], false)],
        &[],
    );
    add(
        &mut map,
        67,
        "(67) Watch an anime that has a main title starting with E, R, T, or X",
        &[],
        &[Dango, Milkshake],
        vec![rules::title_starts_with(&["E", "R", "T", "X"], false)],
        &[],
    );
    add(
        &mut map,
        68,
        "(68) Watch an anime that has a main title starting with H, L, Q, or Y",
        &[],
        &[Prawns, Salad],
        vec![rules::title_starts_with(&["H", "L", "Q", "Y"], false)],
        &[],
    );
    add(
        &mut map,
        69,
        "(69) Watch an anime that has a main title starting with K, V, W, or a number/symbol",
        &[],
        &[Gyoza, SpringRolls],
        vec![rules::title_starts_with(&["K", "V", "W"], true)],
        &[],
    );
    add(
        &mut map,
        70,
        "(70) Watch an anime that is tagged with one of your two lowest ranked Genres/Themes/Demographics by Weighted Score according to your MAL statistics",
        &[
            "Lowest Ranked G/T/D 1:",
            "Lowest Ranked G/T/D 2:",
            "MAL Stats Screenshot:",
        ],
        &[Gyoza, Salad],
        vec![],
        &["Anime is tagged with one of your two lowest ranked tags"],
    );
    add(
        &mut map,
        71,
        "(71) Watch an anime that has the number 26 in its MAL ID",
        &[],
        &[FishAndChips, Sushi],
        vec![rules::mal_id_contains("26")],
        &[],
    );
    add(
        &mut map,
        72,
        "(72) Watch an anime that was Reviewed the same 2026 date you started it",
        &["Review Link:", "Review Screenshot:"],
        &[Burger, Sushi],
        vec![],
        &["Anime was reviewed on the same day you started"],
    );
    add(
        &mut map,
        73,
        "(73) Watch an anime with a Review that has at least four different reaction emojis",
        &["Review Link:", "Review Screenshot:"],
        &[Coffee, Soda, Tea],
        vec![],
        &["Anime has review with >=4 different reaction emojis"],
    );
    add(
        &mut map,
        74,
        "(74) Watch an anime where the difference between ranking and popularity is at least 1,000",
        &["Ranking When Started:", "Popularity When Started:"],
        &[Coffee],
        vec![rules::rank_popularity_gap(1000, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        75,
        "(75) Watch an anime that finished airing before starting the item and has no Recommendations",
        &[],
        &[ApplePie],
        vec![rules::finished_airing()],
        &["Anime has no recommendations"],
    );
    add(
        &mut map,
        76,
        "(76) Watch an anime that finished airing before starting the item and has less than 50,000 Completed members on their Stats page",
        &["Completed Members When Started:"],
        &[Prawns, Soup, SpringRolls],
        vec![
            rules::finished_airing(),
            rules::list_status_members(ListStatus::Completed, 50_000, Cmp::Below),
        ],
        &[],
    );
    add(
        &mut map,
        77,
        "(77) Watch an anime with 10 or more episodes that has a synopsis by MAL Rewrite",
        &[],
        &[ChickenWings, Prawns, Soup, SpringRolls],
        vec![rules::episode_count(10, Cmp::AtLeast)],
        &["Anime has synopsis by MAL Rewrite"],
    );
    add(
        &mut map,
        78,
        "(78) Watch an anime with 150 or less favorites on MAL when you started watching it",
        &["Favorites When Started:"],
        &[Fries, GarlicBread, Onigiri, Tofu],
        vec![rules::favorites(150, Cmp::AtMost)],
        &[],
    );
    add(
        &mut map,
        79,
        "(79) Watch an anime that has a higher score than a listed Adaptation under Related Anime",
        &["Anime Score:", "Adaptation Score:"],
        &[FishAndChips, Lasagna, Omurice, Spaghetti],
        vec![],
        &["Anime has a higher score than a listed adaptation"],
    );
    add(
        &mut map,
        80,
        "(80) Watch an anime with a popularity lower than #500",
        &["Popularity When Started:"],
        &[Coffee, Lemonade, Soda, Tea],
        vec![rules::popularity(500, Cmp::Above)],
        &[],
    );
    add(
        &mut map,
        81,
        "(81) Watch an anime with a popularity lower than #2026",
        &["Popularity When Started:"],
        &[Fries, GarlicBread, Onigiri, TheMelon],
        vec![rules::popularity(2026, Cmp::Above)],
        &[],
    );
    add(
        &mut map,
        82,
        "(82) Watch an anime with a popularity lower than #3211",
        &["Popularity When Started:"],
        &[Burger, FishAndChips, Omurice, Sandwich, Spaghetti, Sushi],
        vec![rules::popularity(3211, Cmp::Above)],
        &[],
    );
    add(
        &mut map,
        83,
        "(83) Watch an anime with a popularity lower than #4015",
        &["Popularity When Started:"],
        &[Prawns, SpringRolls],
        vec![rules::popularity(4015, Cmp::Above)],
        &[],
    );
    add(
        &mut map,
        84,
        "(84) Watch an anime with the numbers \"2\" or \"6\" in the score when you started watching it",
        &["Score Screenshot:"],
        &[Lemonade, Tea],
        vec![rules::score_contains(&["2", "6"])],
        &[],
    );
    add(
        &mut map,
        85,
        "(85) Watch an anime with a score of 7.85 or above when you started watching it",
        &["Score When Started:"],
        &[FishAndChips, Lasagna, Sandwich, Spaghetti],
        vec![rules::score(7.85, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        86,
        "(86) Watch an anime with a score of 7.50 or below when you started watching it",
        &["Score When Started:"],
        &[Coffee, Soda],
        vec![rules::score(7.5, Cmp::AtMost)],
        &[],
    );
    add(
        &mut map,
        87,
        "(87) Watch an anime with a score of 6.26 or below when you started watching it",
        &["Score When Started:"],
        &[TheMelon, Tofu],
        vec![rules::score(6.26, Cmp::AtMost)],
        &[],
    );
    add(
        &mut map,
        88,
        "(88) Watch an anime that is listed under Eating Ramen, Barbecue, or Cooking Curry on AniDB",
        &["List Used:"],
        &[OnionRings],
        vec![],
        &["Anime is listed under specified tags"],
    );
    add(
        &mut map,
        89,
        "(89) Watch an anime that has an Inanimate Object as a character",
        &["Character:"],
        &[ChickenWings, Soup, SpringRolls],
        vec![],
        &["Anime has a character with specified tag"],
    );
    add(
        &mut map,
        90,
        "(90) Watch an anime that only has one main character",
        &[],
        &[GarlicBread, TheMelon],
        vec![rules::main_characters_exactly(1)],
        &[],
    );
    add(
        &mut map,
        91,
        "(91) Watch an anime with 8 or more main characters",
        &[],
        &[Burger, Omurice, Pizza, Spaghetti, Sushi],
        vec![rules::main_characters_at_least(8)],
        &[],
    );
    add(
        &mut map,
        92,
        "(92) Watch an anime that has more main characters than supporting characters",
        &["# of Mains:", "# of Supporting:"],
        &[IceCream],
        vec![rules::more_main_than_supporting()],
        &[],
    );
    add(
        &mut map,
        93,
        "(93) Watch an anime with 3+ main characters that are of the same gender",
        &[],
        &[Burger, FishAndChips, Lasagna, Omurice, Sandwich],
        vec![],
        &["Anime has >=3 main characters of the same gender"],
    );
    add(
        &mut map,
        94,
        "(94) Watch an anime where the same Voice Actor is credited under at least two different characters",
        &["Voice Actor 1:", "Character 1:", "Character 2:"],
        &[ChickenWings, Salad],
        vec![],
        &["Anime has VA credited under >=2 different characters"],
    );
    add(
        &mut map,
        95,
        "(95) Watch an anime that has a main character with majority blue, green, pink, or purple hair color",
        &["Character:"],
        &[ChickenWings, Prawns, Soup, SpringRolls],
        vec![],
        &["Main character has majority blue, green, pink, or purple hair"],
    );
    add(
        &mut map,
        96,
        "(96) Watch an anime with a main character tagged with Big Eaters on Anime Planet",
        &[],
        &[IceCream],
        vec![],
        &["Anime has a main character with specified tag"],
    );
    add(
        &mut map,
        97,
        "(97) Watch an anime in which a character wears glasses",
        &["Character:"],
        &[Burger, FishAndChips, Omurice, Spaghetti, Sushi],
        vec![],
        &["Anime has a character who wears glasses"],
    );
    add(
        &mut map,
        98,
        "(98) Watch an anime that is made by a Studio/Producer that starts with a letter in your MAL username",
        &["Studio/Producer:"],
        &[Onigiri, TheMelon, Tofu],
        vec![rules::company_initial_in_username()],
        &["Anime is made by a Studio/Producer starting with same letter as your MAL username"],
    );
    add(
        &mut map,
        99,
        "(99) Watch an anime by a studio with less than 45 anime in MAL's database",
        &["Studio:"],
        &[FishAndChips, Sushi],
        vec![],
        &["Anime by studio with <45 anime"],
    );
    add(
        &mut map,
        100,
        "(100) Watch an anime by a studio you haven't seen anything from (studio cannot be listed as producer)",
        &["Studio:"],
        &[Gyoza],
        vec![],
        &["Anime by studio you haven't seen anything from"],
    );
    add(
        &mut map,
        101,
        "(101) Watch an anime that is from a Licensor/Producer/Studio starting with A",
        &["Licensor/Producer/Studio:"],
        &[ApplePie, Dango],
        vec![rules::company_starts_with(&["A"], false)],
        &[],
    );
    add(
        &mut map,
        102,
        "(102) Watch an anime that is from a Licensor/Producer/Studio starting with S",
        &["Licensor/Producer/Studio:"],
        &[Fries],
        vec![rules::company_starts_with(&["S"], false)],
        &[],
    );
    add(
        &mut map,
        103,
        "(103) Watch an anime that is from a Licensor/Producer/Studio starting with T",
        &["Licensor/Producer/Studio:"],
        &[Fries, GarlicBread, OnionRings, Tofu],
        vec![rules::company_starts_with(&["T"], false)],
        &[],
    );
    add(
        &mut map,
        104,
        "(104) Watch an anime that is from a Licensor/Producer/Studio starting with B or O",
        &["Licensor/Producer/Studio:"],
        &[Prawns, Salad, Soup],
        vec![rules::company_starts_with(&["B", "O"], false)],
        &[],
    );
    add(
        &mut map,
        105,
        "(105) Watch an anime that is from a Licensor/Producer/Studio starting with D or R",
        &["Licensor/Producer/Studio:"],
        &[Burger, FishAndChips, Sushi],
        vec![rules::company_starts_with(&["D", "R"], false)],
        &[],
    );
    add(
        &mut map,
        106,
        "(106) Watch an anime that is from a Licensor/Producer/Studio starting with E or P",
        &["Licensor/Producer/Studio:"],
        &[Cake],
        vec![rules::company_starts_with(&["E", "P"], false)],
        &[],
    );
    add(
        &mut map,
        107,
        "(107) Watch an anime that is from a Licensor/Producer/Studio starting with G or L",
        &["Licensor/Producer/Studio:"],
        &[Prawns, Soup],
        vec![rules::company_starts_with(&["G", "L"], false)],
        &[],
    );
    add(
        &mut map,
        108,
        "(108) Watch an anime that is from a Licensor/Producer/Studio starting with H or I",
        &["Licensor/Producer/Studio:"],
        &[Sandwich, Sushi],
        vec![rules::company_starts_with(&["H", "I"], false)],
        &[],
    );
    add(
        &mut map,
        109,
        "(109) Watch an anime that is from a Licensor/Producer/Studio starting with M or X",
        &["Licensor/Producer/Studio:"],
        &[ChickenWings, Gyoza],
        vec![rules::company_starts_with(&["M", "X"], false)],
        &[],
    );
    add(
        &mut map,
        110,
        "(110) Watch an anime that is from a Licensor/Producer/Studio starting with C, Z, or a number/symbol",
        &["Licensor/Producer/Studio:"],
        &[GarlicBread, OnionRings, Tofu],
        vec![rules::company_starts_with(&["C", "Z"], true)],
        &[],
    );
    add(
        &mut map,
        111,
        "(111) Watch an anime that is from a Licensor/Producer/Studio starting with F, J, or Y",
        &["Licensor/Producer/Studio:"],
        &[FishAndChips, Lasagna, Omurice, Pizza],
        vec![rules::company_starts_with(&["F", "J", "Y"], false)],
        &[],
    );
    add(
        &mut map,
        112,
        "(112) Watch an anime that is from a Licensor/Producer/Studio starting with K, Q, or U",
        &["Licensor/Producer/Studio:"],
        &[ChickenWings, SpringRolls],
        vec![rules::company_starts_with(&["K", "Q", "U"], false)],
        &[],
    );
    add(
        &mut map,
        113,
        "(113) Watch an anime that is from a Licensor/Producer/Studio starting with N, V, or W",
        &["Licensor/Producer/Studio:"],
        &[Lasagna, Omurice, Pizza, Spaghetti],
        vec![rules::company_starts_with(&["N", "V", "W"], false)],
        &[],
    );
    add(
        &mut map,
        114,
        "(114) Watch an anime from Funimation",
        &[],
        &[ChickenWings, Soup],
        vec![rules::company(&["Funimation"])],
        &[],
    );
    add(
        &mut map,
        115,
        "(115) Watch an anime from NHK",
        &[],
        &[Onigiri, OnionRings],
        vec![rules::company(&["NHK"])],
        &[],
    );
    add(
        &mut map,
        116,
        "(116) Watch an anime from ADV Films or Sentai Filmworks",
        &[],
        &[Cookie],
        vec![rules::company(&["ADV Films", "Sentai Filmworks"])],
        &[],
    );
    add(
        &mut map,
        117,
        "(117) Watch an anime from OLM or Toei Animation",
        &[],
        &[FishAndChips, Pizza, Sandwich, Spaghetti],
        vec![rules::company(&["OLM", "Toei Animation"])],
        &[],
    );
    add(
        &mut map,
        118,
        "(118) Watch an anime from Aniplex, Studio Deen or Tencent Video",
        &[],
        &[Gyoza, Soup, SpringRolls],
        vec![rules::company(&["Aniplex", "Studio Deen", "Tencent Video"])],
        &[],
    );
    add(
        &mut map,
        119,
        "(119) Watch an anime from Aniplex of America, Kadokawa or Production I.G",
        &[],
        &[Lemonade],
        vec![rules::company(&[
            "Aniplex of America",
            "Kadokawa",
            "Production I.G",
        ])],
        &[],
    );
    add(
        &mut map,
        120,
        "(120) Watch an anime from Bandai Entertainment, Discotek Media or J.C.Staff",
        &[],
        &[ChickenWings, Prawns],
        vec![rules::company(&[
            "Bandai Entertainment",
            "Discotek Media",
            "J.C.Staff",
        ])],
        &[],
    );
    add(
        &mut map,
        121,
        "(121) Watch an anime from bilibili, Fuji TV or Pony Canyon",
        &[],
        &[Salad, Soup, SpringRolls],
        vec![rules::company(&["bilibili", "Fuji TV", "Pony Canyon"])],
        &[],
    );
    add(
        &mut map,
        122,
        "(122) Watch an anime from Bandai Visual, Movic or Shin-Ei Animation",
        &[],
        &[OnionRings],
        vec![rules::company(&[
            "Bandai Visual",
            "Movic",
            "Shin-Ei Animation",
        ])],
        &[],
    );
    add(
        &mut map,
        123,
        "(123) Watch an anime from DLE, Shueisha or Sunrise",
        &[],
        &[ApplePie, IceCream],
        vec![rules::company(&["DLE", "Shueisha", "Sunrise"])],
        &[],
    );
    add(
        &mut map,
        124,
        "(124) Watch an anime from Lantis, Madhouse or TBS",
        &[],
        &[FishAndChips, Lasagna, Pizza],
        vec![rules::company(&["Lantis", "Madhouse", "TBS"])],
        &[],
    );
    add(
        &mut map,
        125,
        "(125) Watch an anime from Studio Pierrot, Tatsunoko Production or TV Tokyo",
        &[],
        &[Lasagna, Sandwich, Spaghetti],
        vec![rules::company(&[
            "Studio Pierrot",
            "Tatsunoko Production",
            "TV Tokyo",
        ])],
        &[],
    );
    add(
        &mut map,
        126,
        "(126) Watch an anime from A-1 Pictures, AT-X, Crunchyroll or Magic Capsule",
        &[],
        &[Lemonade],
        vec![rules::company(&[
            "A-1 Pictures",
            "AT-X",
            "Crunchyroll",
            "Magic Capsule",
        ])],
        &[],
    );
    add(
        &mut map,
        127,
        "(127) Watch an anime from AIC, Kadokawa Shoten, TMS Entertainment or VIZ Media",
        &[],
        &[ApplePie, Cake],
        vec![rules::company(&[
            "AIC",
            "Kadokawa Shoten",
            "TMS Entertainment",
            "VIZ Media",
        ])],
        &[],
    );
    add(
        &mut map,
        128,
        "(128) Watch an anime listed on a 2026 participant's Anime+ recommendations",
        &["Participant:", "Their Post Link:", "Screenshot:"],
        &[Burger, Omurice, Pizza, Sandwich],
        vec![],
        &["Anime on participant's recommendations"],
    );
    add(
        &mut map,
        129,
        "(129) Watch an anime suggested to you by MAL or by Anime+ and provide a screenshot including your username",
        &["Screenshot Showing Username:"],
        &[ChickenWings, Gyoza, Soup],
        vec![],
        &["Anime suggested by MAL or Anime+"],
    );
    add(
        &mut map,
        130,
        "(130) Watch an anime from one of your 5 lowest ranked studios sorted by Mean on Anime+",
        &["Screenshot:", "Lowest Ranked Studios:"],
        &[Sushi],
        vec![],
        &["Anime from applicable studios"],
    );
    add(
        &mut map,
        131,
        "(131) Watch an anime tagged with your lowest scored genre/theme/demographic sorted by Mean according to Anime+",
        &[],
        &[Sandwich],
        vec![],
        &["Anime tagged with lowest scored by mean"],
    );
    add(
        &mut map,
        132,
        "(132) Watch an anime that can be found in the same public Interest Stack as one of your listed MAL favorite anime",
        &["MAL Favorite:", "Interest Stack:"],
        &[IceCream, Milkshake],
        vec![],
        &["Anime found in same public interest stack as one of your favorites"],
    );
    add(
        &mut map,
        133,
        "(133) Watch an anime that began airing the same season and year as one that was previously watched and listed in your MAL favorites",
        &["MAL Favorite:", "Season/Year:"],
        &[Salad, SpringRolls],
        vec![],
        &[
            "Anime began airing the same season/year as one of your favorites",
            "Favorite anime completed before starting",
        ],
    );
    add(
        &mut map,
        134,
        "(134) Watch an anime Recommended to one you already completed and have listed in your MAL Favorites",
        &["MAL Favorite:", "Date Favorite Completed:"],
        &[Burger, Lasagna, Sandwich, Sushi],
        vec![],
        &["Anime recommended to a completed anime in your favorites"],
    );
    add(
        &mut map,
        135,
        "(135) Watch an anime in which one of the People listed in your MAL Favorites participated",
        &["Favorite Person:"],
        &[Lasagna, Pizza, Sandwich],
        vec![],
        &["Favorite person participated in anime"],
    );
    add(
        &mut map,
        136,
        "(136) Watch an anime that has no Opening Theme and no Ending Theme listed on MAL",
        &[],
        &[Soda],
        vec![rules::song_count_equals(0, 0)],
        &[],
    );
    add(
        &mut map,
        137,
        "(137) Watch an anime that has only one Opening Theme and one Ending Theme listed on MAL",
        &[],
        &[GarlicBread, TheMelon],
        vec![rules::song_count_equals(1, 1)],
        &[],
    );
    add(
        &mut map,
        138,
        "(138) Watch an anime with either 5+ Opening Themes or 5+ Ending Themes listed",
        &[],
        &[Cookie, Milkshake],
        vec![rules::song_count_at_least(5, 5)],
        &[],
    );
    add(
        &mut map,
        139,
        "(139) Watch an anime in which 2+ different Opening Theme and/or Ending Theme are performed by the same Artist/Group",
        &["Artist/Group:"],
        &[Burger, Omurice, Pizza, Spaghetti],
        vec![],
        &[">=2 different OP/ED themes are by the same artist/group"],
    );
    add(
        &mut map,
        140,
        "(140) Watch an anime with a listed Voice Actor who is also credited with a Theme/Insert Song Performance in the anime",
        &["Voice Actor:"],
        &[Salad, Soup, SpringRolls],
        vec![],
        &["VA is credited with a Theme/Insert song performance in anime"],
    );
    add(
        &mut map,
        141,
        "(141) Watch an anime tagged with Action",
        &[],
        &[ChickenWings, Prawns, Soup, SpringRolls],
        vec![rules::tags(&["Action"], 1)],
        &[],
    );
    add(
        &mut map,
        142,
        "(142) Watch an anime tagged with Adventure",
        &[],
        &[ApplePie, Cake, Cookie, Dango],
        vec![rules::tags(&["Adventure"], 1)],
        &[],
    );
    add(
        &mut map,
        143,
        "(143) Watch an anime tagged with Comedy",
        &[],
        &[Coffee, Lemonade, Soda, Tea],
        vec![rules::tags(&["Comedy"], 1)],
        &[],
    );
    add(
        &mut map,
        144,
        "(144) Watch an anime tagged with Fantasy",
        &[],
        &[Coffee],
        vec![rules::tags(&["Fantasy"], 1)],
        &[],
    );
    add(
        &mut map,
        145,
        "(145) Watch an anime tagged with Music",
        &[],
        &[Fries, Onigiri, OnionRings, TheMelon, Tofu],
        vec![rules::tags(&["Music"], 1)],
        &[],
    );
    add(
        &mut map,
        146,
        "(146) Watch an anime tagged with Kids",
        &[],
        &[Gyoza, Prawns, SpringRolls],
        vec![rules::tags(&["Kids"], 1)],
        &[],
    );
    add(
        &mut map,
        147,
        "(147) Watch an anime tagged with either Anthropomorphic or Mecha",
        &[],
        &[ApplePie, Cookie],
        vec![rules::tags(&["Anthropomorphic", "Mecha"], 1)],
        &[],
    );
    add(
        &mut map,
        148,
        "(148) Watch an anime tagged with either Avant Garde or Seinen",
        &[],
        &[Sandwich, Spaghetti, Sushi],
        vec![rules::tags(&["Avant Garde", "Seinen"], 1)],
        &[],
    );
    add(
        &mut map,
        149,
        "(149) Watch an anime tagged with either Historical or Shounen",
        &[],
        &[Burger, Lasagna, Omurice, Pizza, Spaghetti],
        vec![rules::tags(&["Historical", "Shounen"], 1)],
        &[],
    );
    add(
        &mut map,
        150,
        "(150) Watch an anime tagged with either Slice of Life or Supernatural",
        &[],
        &[Prawns, Soup, SpringRolls],
        vec![rules::tags(&["Slice of Life", "Supernatural"], 1)],
        &[],
    );
    add(
        &mut map,
        151,
        "(151) Watch an anime tagged with Adult Cast, Reverse Harem or Showbiz",
        &[],
        &[Lasagna, Pizza, Spaghetti],
        vec![rules::tags(&["Adult Cast", "Reverse Harem", "Showbiz"], 1)],
        &[],
    );
    add(
        &mut map,
        152,
        "(152) Watch an anime tagged with Boys Love, Mystery or Villainess",
        &[],
        &[Burger],
        vec![rules::tags(&["Boys Love", "Mystery", "Villainess"], 1)],
        &[],
    );
    add(
        &mut map,
        153,
        "(153) Watch an anime tagged with Childcare, Parody or Magical Sex Shift",
        &[],
        &[Lasagna, Sandwich],
        vec![rules::tags(&["Childcare", "Parody", "Magical Sex Shift"], 1)],
        &[],
    );
    add(
        &mut map,
        154,
        "(154) Watch an anime tagged with Combat Sports, Love Status Quo or Martial Arts",
        &[],
        &[Cookie, IceCream],
        vec![rules::tags(
            &["Combat Sports", "Love Status Quo", "Martial Arts"],
            1,
        )],
        &[],
    );
    add(
        &mut map,
        155,
        "(155) Watch an anime tagged with Crossdressing, Military or Visual Arts",
        &[],
        &[Sandwich, Spaghetti, Sushi],
        vec![rules::tags(&["Crossdressing", "Military", "Visual Arts"], 1)],
        &[],
    );
    add(
        &mut map,
        156,
        "(156) Watch an anime tagged with Delinquents, Super Power or Survival",
        &[],
        &[Cake],
        vec![rules::tags(&["Delinquents", "Super Power", "Survival"], 1)],
        &[],
    );
    add(
        &mut map,
        157,
        "(157) Watch an anime tagged with Educational, Urban Fantasy or Vampire",
        &[],
        &[Milkshake],
        vec![rules::tags(&["Educational", "Urban Fantasy", "Vampire"], 1)],
        &[],
    );
    add(
        &mut map,
        158,
        "(158) Watch an anime tagged with Gag Humor, Harem or Time Travel",
        &[],
        &[Cake, IceCream],
        vec![rules::tags(&["Gag Humor", "Harem", "Time Travel"], 1)],
        &[],
    );
    add(
        &mut map,
        159,
        "(159) Watch an anime tagged with Girls Love, Horror or Performing Arts",
        &[],
        &[Sandwich, Sushi],
        vec![rules::tags(&["Girls Love", "Horror", "Performing Arts"], 1)],
        &[],
    );
    add(
        &mut map,
        160,
        "(160) Watch an anime tagged with Gore, Psychological or Video Game",
        &[],
        &[GarlicBread, OnionRings],
        vec![rules::tags(&["Gore", "Psychological", "Video Game"], 1)],
        &[],
    );
    add(
        &mut map,
        161,
        "(161) Watch an anime tagged with High Stakes Game, Mythology or Organized Crime",
        &[],
        &[Gyoza, Salad, SpringRolls],
        vec![rules::tags(
            &["High Stakes Game", "Mythology", "Organized Crime"],
            1,
        )],
        &[],
    );
    add(
        &mut map,
        162,
        "(162) Watch an anime tagged with Idols (Female), Mahou Shoujo or Reincarnation",
        &[],
        &[Salad],
        vec![rules::tags(
            &["Idols (Female)", "Mahou Shoujo", "Reincarnation"],
            1,
        )],
        &[],
    );
    add(
        &mut map,
        163,
        "(163) Watch an anime tagged with Idols (Male), Isekai or Racing",
        &[],
        &[Sushi],
        vec![rules::tags(&["Idols (Male)", "Isekai", "Racing"], 1)],
        &[],
    );
    add(
        &mut map,
        164,
        "(164) Watch an anime tagged with Josei, Pets or Shoujo",
        &[],
        &[Gyoza, Salad],
        vec![rules::tags(&["Josei", "Pets", "Shoujo"], 1)],
        &[],
    );
    add(
        &mut map,
        165,
        "(165) Watch an anime tagged with Love Polygon, Otaku Culture or Space",
        &[],
        &[Cookie, Milkshake],
        vec![rules::tags(&["Love Polygon", "Otaku Culture", "Space"], 1)],
        &[],
    );
    add(
        &mut map,
        166,
        "(166) Watch an anime tagged with Award Winning, CGDCT or Suspense",
        &[],
        &[OnionRings, TheMelon],
        vec![rules::tags(&["Award Winning", "CGDCT", "Suspense"], 1)],
        &[],
    );
    add(
        &mut map,
        167,
        "(167) Watch an anime tagged with Detective, Iyashikei or Team Sports",
        &[],
        &[Lasagna, Sandwich, Sushi],
        vec![rules::tags(&["Detective", "Iyashikei", "Team Sports"], 1)],
        &[],
    );
    add(
        &mut map,
        168,
        "(168) Watch an anime tagged with Gourmet, Medical or Sports",
        &[],
        &[Burger, Lasagna],
        vec![rules::tags(&["Gourmet", "Medical", "Sports"], 1)],
        &[],
    );
    add(
        &mut map,
        169,
        "(169) Watch an anime tagged with Samurai, Strategy Game or Workplace",
        &[],
        &[Gyoza, Salad],
        vec![rules::tags(&["Samurai", "Strategy Game", "Workplace"], 1)],
        &[],
    );
    add(
        &mut map,
        170,
        "(170) Watch an anime tagged with at least TWO of the following: Drama, Romance, School, Sci-Fi",
        &["Tagged With 1:", "Tagged With 2:"],
        &[ChickenWings, Gyoza, Prawns],
        vec![rules::tags(&["Drama", "Romance", "School", "Sci-Fi"], 2)],
        &[],
    );
    add(
        &mut map,
        171,
        "(171) Watch an anime tagged with 2 Genres or more",
        &[],
        &[Tea],
        vec![rules::genre_count(2, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        172,
        "(172) Watch an anime tagged with 3 Genres or more",
        &[],
        &[Dango, IceCream],
        vec![rules::genre_count(3, Cmp::AtLeast)],
        &[],
    );
    add(
        &mut map,
        173,
        "(173) Watch an anime rated G - All Ages or PG - Children",
        &[],
        &[Burger, Lasagna, Omurice, Pizza, Sushi],
        vec![rules::rating(&["G - All Ages", "PG - Children"])],
        &[],
    );
    add(
        &mut map,
        174,
        "(174) Watch an anime rated PG-13 - Teens 13 or older",
        &[],
        &[Soda, Tea],
        vec![rules::rating(&["PG-13 - Teens 13 or older"])],
        &[],
    );
    add(
        &mut map,
        175,
        "(175) Watch an anime rated R -17+, R+ - Mild Nudity, or Rx - Hentai",
        &[],
        &[ChickenWings, Prawns, Salad, SpringRolls],
        vec![rules::rating(&[
            "R - 17+ (violence & profanity)",
            "R+ - Mild Nudity",
            "Rx - Hentai",
        ])],
        &[],
    );
    add(
        &mut map,
        176,
        "(176) Watch an anime adapted from a Game Source",
        &[],
        &[FishAndChips, Omurice, Pizza, Spaghetti],
        vec![rules::source(&["Game"])],
        &[],
    );
    add(
        &mut map,
        177,
        "(177) Watch an anime adapted from a Manga Source",
        &[],
        &[Gyoza, Prawns, Soup, SpringRolls],
        vec![rules::source(&["Manga"])],
        &[],
    );
    add(
        &mut map,
        178,
        "(178) Watch an anime adapted from an Original Source",
        &[],
        &[ApplePie, Cake, Dango],
        vec![rules::source(&["Original"])],
        &[],
    );
    add(
        &mut map,
        179,
        "(179) Watch an anime adapted from an Unknown Source",
        &[],
        &[Fries, Onigiri, OnionRings, TheMelon, Tofu],
        vec![rules::source(&["Unknown"])],
        &[],
    );
    add(
        &mut map,
        180,
        "(180) Watch an anime adapted from a 4-koma Manga or Novel Source",
        &[],
        &[TheMelon],
        vec![rules::source(&["4-koma Manga", "Novel"])],
        &[],
    );
    add(
        &mut map,
        181,
        "(181) Watch an anime adapted from a Book or Light Novel Source",
        &[],
        &[Lemonade],
        vec![rules::source(&["Book", "Light Novel"])],
        &[],
    );
    add(
        &mut map,
        182,
        "(182) Watch an anime adapted from a Mixed Media or Visual Novel Source",
        &[],
        &[Prawns, Salad],
        vec![rules::source(&["Mixed Media", "Visual Novel"])],
        &[],
    );
    add(
        &mut map,
        183,
        "(183) Watch an anime adapted from a Music, Picture Book or Web Manga Source",
        &[],
        &[Onigiri, TheMelon],
        vec![rules::source(&["Music", "Picture Book", "Web Manga"])],
        &[],
    );
    add(
        &mut map,
        184,
        "(184) Watch an anime adapted from an Other or Web Novel Source",
        &[],
        &[FishAndChips, Lasagna, Pizza, Sandwich],
        vec![rules::source(&["Other", "Web Novel"])],
        &[],
    );
    add(
        &mut map,
        185,
        "(185) Watch an anime generated using Spin.moe",
        &["Screenshot:"],
        &[Cookie, IceCream],
        vec![],
        &["Anime generated using spin.moe"],
    );
    add(
        &mut map,
        186,
        "(186) Watch a Chinese or Korean anime",
        &[],
        &[Onigiri, Tofu],
        vec![],
        &["Anime present on HOF challenge"],
    );
    add(
        &mut map,
        187,
        "(187) Finish an anime that you watched at least one episode of and dropped/put on hold before September 30, 2025 (Alternatively: watch an anime provided by other participants)",
        &[
            "Original Anime Start Date:",
            "Last Watched Episode Date:",
            "Eps Previously Watched:",
            "Screenshot:",
        ],
        &[Sandwich, Sushi],
        vec![],
        &[
            "Anime dropped/put on-hold before September 30, 2025",
            "Anime has more than one episode",
            "At least one episode watched previously",
        ],
    );
    add(
        &mut map,
        188,
        "(188) Watch an anime that has been adapted to live-action",
        &[],
        &[ApplePie, Milkshake],
        vec![],
        &["Anime present under Anime Relations on club page"],
    );
    add(
        &mut map,
        189,
        "(189) Watch an anime that is listed in the School Clubs tag on AniDB",
        &[],
        &[ChickenWings, Gyoza],
        vec![],
        &["Anime has specified tag on AniDB"],
    );
    add(
        &mut map,
        190,
        "(190) Watch an anime with no related anime listed",
        &[],
        &[Dango, Milkshake],
        vec![],
        &["Anime has no related anime listed"],
    );
    add(
        &mut map,
        191,
        "(191) Watch an afternoon/evening anime (broadcast between 17:00 and 22:59 JST)",
        &[],
        &[Fries, OnionRings, TheMelon],
        vec![rules::air_hour(&["17", "18", "19", "20", "21", "22"])],
        &[],
    );
    add(
        &mut map,
        192,
        "(192) Watch a late night anime (broadcast between 23:00 and 03:59 JST)",
        &[],
        &[ApplePie, Cake, Cookie],
        vec![rules::air_hour(&["23", "00", "01", "02", "03"])],
        &[],
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::CourseGroup;

    #[test]
    fn table_covers_every_numbered_challenge() {
        let map = build();
        assert_eq!(map.len(), 192);
        assert_eq!(map.keys().next(), Some(&ChallengeId(1)));
        assert_eq!(map.keys().last(), Some(&ChallengeId(192)));
    }

    #[test]
    fn descriptions_carry_their_own_number() {
        for (id, challenge) in build() {
            assert!(
                challenge.description.starts_with(&format!("({})", id.0)),
                "challenge {} description does not lead with its number",
                id
            );
        }
    }

    #[test]
    fn sequel_pair_shares_its_course_list() {
        let map = build();
        let first = map.get(&ChallengeId(21)).unwrap();
        let second = map.get(&ChallengeId(22)).unwrap();
        assert_eq!(first.courses, second.courses);
    }

    #[test]
    fn every_course_group_is_reachable() {
        let map = build();
        for group in CourseGroup::ALL {
            let reachable = map.values().any(|challenge| {
                challenge
                    .courses
                    .iter()
                    .any(|course| course.group() == group)
            });
            assert!(reachable, "no challenge is eligible for the {} group", group);
        }
    }

    #[test]
    fn drink_courses_offer_at_least_their_required_count() {
        let map = build();
        let eligible = map
            .values()
            .filter(|challenge| challenge.courses.contains(&Coffee))
            .count();
        assert!(eligible >= 5, "Coffee has only {} eligible challenges", eligible);
    }
}
