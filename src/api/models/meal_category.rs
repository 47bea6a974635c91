use std::fmt;
use std::str::FromStr;
use serde::{ Deserialize, Serialize };

/// The closed set of categories the listing endpoint accepts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MealCategory {
    Beef,
    Chicken,
    Dessert,
    Lamb,
    Miscellaneous,
    Pasta,
    Pork,
    Seafood,
    Side,
    Starter,
    Vegan,
    Vegetarian,
    Breakfast,
    Goat
}

impl MealCategory {
    pub const ALL: [MealCategory; 14] = [
        MealCategory::Beef,
        MealCategory::Chicken,
        MealCategory::Dessert,
        MealCategory::Lamb,
        MealCategory::Miscellaneous,
        MealCategory::Pasta,
        MealCategory::Pork,
        MealCategory::Seafood,
        MealCategory::Side,
        MealCategory::Starter,
        MealCategory::Vegan,
        MealCategory::Vegetarian,
        MealCategory::Breakfast,
        MealCategory::Goat
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MealCategory::Beef => "Beef",
            MealCategory::Chicken => "Chicken",
            MealCategory::Dessert => "Dessert",
            MealCategory::Lamb => "Lamb",
            MealCategory::Miscellaneous => "Miscellaneous",
            MealCategory::Pasta => "Pasta",
            MealCategory::Pork => "Pork",
            MealCategory::Seafood => "Seafood",
            MealCategory::Side => "Side",
            MealCategory::Starter => "Starter",
            MealCategory::Vegan => "Vegan",
            MealCategory::Vegetarian => "Vegetarian",
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Goat => "Goat"
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealCategory {
    type Err = String;

    // Case-insensitive so route paths like /categories/dessert work
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        MealCategory::ALL
            .iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("Unknown meal category \"{}\"", trimmed))
    }
}
