use std::sync::OnceLock;
use regex::Regex;
use serde::{ Deserialize, Serialize };
use serde_json::Value;
use crate::api::models::json_fields::{ self, JsonObject };
use crate::api::models::MealDbError;

pub const INGREDIENT_SLOTS: usize = 20;
pub const SENTINEL_NAME: &str = "error";
pub const SENTINEL_THUMBNAIL_URL: &str = "https://www.themealdb.com/images/category/dessert.png";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    #[serde(rename  = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(rename  = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename  = "sourceUrl")]
    pub source_url: Option<String>,
    #[serde(rename  = "drinkAlternate")]
    pub drink_alternate: Option<String>,
    pub tags: Option<String>,
    pub ingredients: Vec<String>
}

impl Recipe {
    /// Decodes one entry of the lookup endpoint's `meals` array.
    pub fn from_json(object: &JsonObject) -> Result<Self, MealDbError> {
        let video_url = json_fields::required_string(object, "strYoutube")?;
        Ok(Recipe {
            id: json_fields::required_string(object, "idMeal")?,
            name: json_fields::required_string(object, "strMeal")?,
            category: json_fields::required_string(object, "strCategory")?,
            area: json_fields::required_string(object, "strArea")?,
            instructions: normalize_newlines(&json_fields::required_string(object, "strInstructions")?),
            thumbnail_url: json_fields::required_string(object, "strMealThumb")?,
            video_url: Some(video_url).filter(|url| !url.trim().is_empty()),
            source_url: json_fields::optional_string(object, "strSource"),
            drink_alternate: json_fields::optional_string(object, "strDrinkAlternate"),
            tags: json_fields::optional_string(object, "strTags"),
            ingredients: ingredient_lines(object)
        })
    }

    /// Stand-in returned by the lossy lookup when nothing usable came back.
    pub fn sentinel() -> Self {
        Recipe {
            id: String::new(),
            name: SENTINEL_NAME.to_string(),
            category: String::new(),
            area: String::new(),
            instructions: String::new(),
            thumbnail_url: SENTINEL_THUMBNAIL_URL.to_string(),
            video_url: None,
            source_url: None,
            drink_alternate: None,
            tags: None,
            ingredients: vec![]
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty() && self.name == SENTINEL_NAME && self.thumbnail_url == SENTINEL_THUMBNAIL_URL
    }
}

/// Decodes a lookup envelope. Upstream answers zero or one meals; extras are ignored.
pub fn decode_recipe(envelope: &Value) -> Result<Option<Recipe>, MealDbError> {
    match json_fields::meals_array(envelope)?.first() {
        Some(object) => Recipe::from_json(object).map(Some),
        None => Ok(None)
    }
}

/// Flattens `strIngredientN`/`strMeasureN` for N in 1..=20 into "measure ingredient"
/// lines. Blank ingredients are skipped without ending the scan; a blank measure
/// leaves just the ingredient.
pub fn ingredient_lines(object: &JsonObject) -> Vec<String> {
    let mut lines = vec![];
    for slot in 1..=INGREDIENT_SLOTS {
        let ingredient = match json_fields::optional_string(object, &format!("strIngredient{}", slot)) {
            Some(ingredient) => ingredient,
            None => continue
        };
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            continue;
        }
        let measure = json_fields::optional_string(object, &format!("strMeasure{}", slot)).unwrap_or_default();
        let measure = measure.trim();
        if measure.is_empty() {
            lines.push(ingredient.to_string());
        } else {
            lines.push(format!("{} {}", measure, ingredient));
        }
    }
    lines
}

/// Strips carriage returns and turns every line break into a paragraph break,
/// never leaving more than one blank line in a row.
pub fn normalize_newlines(text: &str) -> String {
    static NEWLINE_RUN: OnceLock<Regex> = OnceLock::new();
    let newline_run = NEWLINE_RUN.get_or_init(|| Regex::new("\n{3,}").expect("newline pattern is valid"));
    let doubled = text.replace('\r', "").replace('\n', "\n\n");
    newline_run.replace_all(&doubled, "\n\n").into_owned()
}
