use serde::{ Deserialize, Serialize };
use serde_json::Value;
use crate::api::models::json_fields::{ self, JsonObject };
use crate::api::models::MealDbError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    #[serde(rename  = "thumbnailUrl")]
    pub thumbnail_url: String
}

impl MealSummary {
    pub fn from_json(object: &JsonObject) -> Result<Self, MealDbError> {
        Ok(MealSummary {
            id: json_fields::required_string(object, "idMeal")?,
            name: json_fields::required_string(object, "strMeal")?,
            thumbnail_url: json_fields::required_string(object, "strMealThumb")?
        })
    }

    /// Case-insensitive substring match used by the list search box.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Decodes a category listing envelope, keeping upstream order and duplicates.
pub fn decode_meal_summaries(envelope: &Value) -> Result<Vec<MealSummary>, MealDbError> {
    json_fields::meals_array(envelope)?
        .iter()
        .map(MealSummary::from_json)
        .collect()
}

pub fn filter_meal_summaries(meals: Vec<MealSummary>, query: Option<&str>) -> Vec<MealSummary> {
    match query {
        Some(query) => meals.into_iter().filter(|meal| meal.matches_search(query)).collect(),
        None => meals
    }
}
