use serde::{Deserialize, Serialize};
use std::fmt;

/// Themed category a course belongs to. A diner picks at most one course per
/// group for a given run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CourseGroup {
    Drink,
    Starter,
    Main,
    Side,
    Dessert,
}

impl CourseGroup {
    pub const ALL: [CourseGroup; 5] = [
        CourseGroup::Drink,
        CourseGroup::Starter,
        CourseGroup::Main,
        CourseGroup::Side,
        CourseGroup::Dessert,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CourseGroup::Drink => "Drink",
            CourseGroup::Starter => "Starter",
            CourseGroup::Main => "Main",
            CourseGroup::Side => "Side",
            CourseGroup::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for CourseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable menu item. Serialized under its display name so stored
/// state stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CourseId {
    Coffee,
    Tea,
    Soda,
    Lemonade,
    Soup,
    Salad,
    Gyoza,
    #[serde(rename = "Spring Rolls")]
    SpringRolls,
    Prawns,
    #[serde(rename = "Chicken Wings")]
    ChickenWings,
    Burger,
    Sushi,
    Spaghetti,
    Pizza,
    Lasagna,
    Sandwich,
    Omurice,
    #[serde(rename = "Fish & Chips")]
    FishAndChips,
    Fries,
    Onigiri,
    #[serde(rename = "Onion Rings")]
    OnionRings,
    #[serde(rename = "Garlic Bread")]
    GarlicBread,
    #[serde(rename = "The Melon")]
    TheMelon,
    Tofu,
    Cake,
    #[serde(rename = "Ice Cream")]
    IceCream,
    Cookie,
    #[serde(rename = "Apple Pie")]
    ApplePie,
    Milkshake,
    Dango,
}

impl CourseId {
    /// Every course, grouped Drink then Starter then Main then Side then
    /// Dessert. Catalog storage follows this order.
    pub const ALL: [CourseId; 30] = [
        CourseId::Coffee,
        CourseId::Tea,
        CourseId::Soda,
        CourseId::Lemonade,
        CourseId::Soup,
        CourseId::Salad,
        CourseId::Gyoza,
        CourseId::SpringRolls,
        CourseId::Prawns,
        CourseId::ChickenWings,
        CourseId::Burger,
        CourseId::Sushi,
        CourseId::Spaghetti,
        CourseId::Pizza,
        CourseId::Lasagna,
        CourseId::Sandwich,
        CourseId::Omurice,
        CourseId::FishAndChips,
        CourseId::Fries,
        CourseId::Onigiri,
        CourseId::OnionRings,
        CourseId::GarlicBread,
        CourseId::TheMelon,
        CourseId::Tofu,
        CourseId::Cake,
        CourseId::IceCream,
        CourseId::Cookie,
        CourseId::ApplePie,
        CourseId::Milkshake,
        CourseId::Dango,
    ];

    /// Group membership is fixed by the menu, never computed from data.
    pub const fn group(self) -> CourseGroup {
        match self {
            CourseId::Coffee | CourseId::Tea | CourseId::Soda | CourseId::Lemonade => {
                CourseGroup::Drink
            }
            CourseId::Soup
            | CourseId::Salad
            | CourseId::Gyoza
            | CourseId::SpringRolls
            | CourseId::Prawns
            | CourseId::ChickenWings => CourseGroup::Starter,
            CourseId::Burger
            | CourseId::Sushi
            | CourseId::Spaghetti
            | CourseId::Pizza
            | CourseId::Lasagna
            | CourseId::Sandwich
            | CourseId::Omurice
            | CourseId::FishAndChips => CourseGroup::Main,
            CourseId::Fries
            | CourseId::Onigiri
            | CourseId::OnionRings
            | CourseId::GarlicBread
            | CourseId::TheMelon
            | CourseId::Tofu => CourseGroup::Side,
            CourseId::Cake
            | CourseId::IceCream
            | CourseId::Cookie
            | CourseId::ApplePie
            | CourseId::Milkshake
            | CourseId::Dango => CourseGroup::Dessert,
        }
    }

    /// Display name, matching the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            CourseId::Coffee => "Coffee",
            CourseId::Tea => "Tea",
            CourseId::Soda => "Soda",
            CourseId::Lemonade => "Lemonade",
            CourseId::Soup => "Soup",
            CourseId::Salad => "Salad",
            CourseId::Gyoza => "Gyoza",
            CourseId::SpringRolls => "Spring Rolls",
            CourseId::Prawns => "Prawns",
            CourseId::ChickenWings => "Chicken Wings",
            CourseId::Burger => "Burger",
            CourseId::Sushi => "Sushi",
            CourseId::Spaghetti => "Spaghetti",
            CourseId::Pizza => "Pizza",
            CourseId::Lasagna => "Lasagna",
            CourseId::Sandwich => "Sandwich",
            CourseId::Omurice => "Omurice",
            CourseId::FishAndChips => "Fish & Chips",
            CourseId::Fries => "Fries",
            CourseId::Onigiri => "Onigiri",
            CourseId::OnionRings => "Onion Rings",
            CourseId::GarlicBread => "Garlic Bread",
            CourseId::TheMelon => "The Melon",
            CourseId::Tofu => "Tofu",
            CourseId::Cake => "Cake",
            CourseId::IceCream => "Ice Cream",
            CourseId::Cookie => "Cookie",
            CourseId::ApplePie => "Apple Pie",
            CourseId::Milkshake => "Milkshake",
            CourseId::Dango => "Dango",
        }
    }

    /// Position in [`CourseId::ALL`], used for dense catalog storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            CourseId::Coffee => 0,
            CourseId::Tea => 1,
            CourseId::Soda => 2,
            CourseId::Lemonade => 3,
            CourseId::Soup => 4,
            CourseId::Salad => 5,
            CourseId::Gyoza => 6,
            CourseId::SpringRolls => 7,
            CourseId::Prawns => 8,
            CourseId::ChickenWings => 9,
            CourseId::Burger => 10,
            CourseId::Sushi => 11,
            CourseId::Spaghetti => 12,
            CourseId::Pizza => 13,
            CourseId::Lasagna => 14,
            CourseId::Sandwich => 15,
            CourseId::Omurice => 16,
            CourseId::FishAndChips => 17,
            CourseId::Fries => 18,
            CourseId::Onigiri => 19,
            CourseId::OnionRings => 20,
            CourseId::GarlicBread => 21,
            CourseId::TheMelon => 22,
            CourseId::Tofu => 23,
            CourseId::Cake => 24,
            CourseId::IceCream => 25,
            CourseId::Cookie => 26,
            CourseId::ApplePie => 27,
            CourseId::Milkshake => 28,
            CourseId::Dango => 29,
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_course_indexes_its_position_in_all() {
        for (position, course) in CourseId::ALL.iter().enumerate() {
            assert_eq!(course.index(), position, "{course} out of order");
        }
    }

    #[test]
    fn group_sizes_match_the_menu() {
        let count = |group: CourseGroup| {
            CourseId::ALL
                .iter()
                .filter(|course| course.group() == group)
                .count()
        };
        assert_eq!(count(CourseGroup::Drink), 4);
        assert_eq!(count(CourseGroup::Starter), 6);
        assert_eq!(count(CourseGroup::Main), 8);
        assert_eq!(count(CourseGroup::Side), 6);
        assert_eq!(count(CourseGroup::Dessert), 6);
    }

    #[test]
    fn serializes_under_display_names() {
        let json = serde_json::to_string(&CourseId::FishAndChips).expect("serializes");
        assert_eq!(json, "\"Fish & Chips\"");
        let back: CourseId = serde_json::from_str(&json).expect("round trips");
        assert_eq!(back, CourseId::FishAndChips);
    }
}
