use reqwest::{ Client, Url };
use serde_json::{ json, Value };
use crate::api::models::{ self, FetchOutcome, MealCategory, MealDbError, MealDbSettings, MealSummary, Recipe };
use crate::api::ResourceService;

const CATEGORY_LISTING_PATH: &str = "filter.php";
const RECIPE_LOOKUP_PATH: &str = "lookup.php";

#[derive(Clone)]
pub struct RecipeService {
    resource_service: ResourceService,
    client: Client,
    base_url: String
}

impl RecipeService {
    pub fn new(resource_service: ResourceService, client: Client, settings: &MealDbSettings) -> RecipeService {
        RecipeService {
            resource_service,
            client,
            base_url: settings.base_url.clone()
        }
    }

    pub fn category_listing_url(&self, category: MealCategory) -> Result<Url, MealDbError> {
        self.endpoint_url(CATEGORY_LISTING_PATH, "c", category.name())
    }

    pub fn recipe_lookup_url(&self, meal_id: &str) -> Result<Url, MealDbError> {
        let meal_id = meal_id.trim();
        if meal_id.is_empty() {
            return Err(MealDbError::InvalidRequest(self.resource_service.string("blank_meal_id_error_message")));
        }
        self.endpoint_url(RECIPE_LOOKUP_PATH, "i", meal_id)
    }

    /// Lists the meals of a category. Only an unbuildable request is an `Err`;
    /// transport and decode problems come back as `FetchOutcome::Failed`.
    pub async fn list_by_category(&self, category: MealCategory) -> Result<FetchOutcome<Vec<MealSummary>>, MealDbError> {
        let url = self.category_listing_url(category)?;
        let message_data = &json!({ "category": category.name() });
        log::info!("{}", self.resource_service.render("loading_meals_info_message_template", message_data));
        let outcome = match self.get_json(url).await.and_then(|envelope| models::decode_meal_summaries(&envelope)) {
            Ok(meals) if meals.is_empty() => FetchOutcome::Empty,
            Ok(meals) => {
                let message_data = &json!({ "category": category.name(), "count": meals.len() });
                log::info!("{}", self.resource_service.render("loaded_meals_info_message_template", message_data));
                FetchOutcome::Found(meals)
            }
            Err(error) => {
                let message_data = &json!({ "category": category.name(), "error": error.to_string() });
                log::error!("{}", self.resource_service.render("loading_meals_failed_error_message_template", message_data));
                FetchOutcome::Failed(error)
            }
        };
        Ok(outcome)
    }

    /// Lossy listing: a failed fetch is indistinguishable from an empty category.
    pub async fn list_by_category_or_empty(&self, category: MealCategory) -> Result<Vec<MealSummary>, MealDbError> {
        Ok(self.list_by_category(category).await?.unwrap_or_else(Vec::new))
    }

    pub async fn lookup_by_id(&self, meal_id: &str) -> Result<FetchOutcome<Recipe>, MealDbError> {
        let url = self.recipe_lookup_url(meal_id)?;
        let message_data = &json!({ "meal_id": meal_id.trim() });
        log::info!("{}", self.resource_service.render("loading_recipe_info_message_template", message_data));
        let outcome = match self.get_json(url).await.and_then(|envelope| models::decode_recipe(&envelope)) {
            Ok(Some(recipe)) => FetchOutcome::Found(recipe),
            Ok(None) => {
                log::info!("{}", self.resource_service.render("recipe_not_found_info_message_template", message_data));
                FetchOutcome::Empty
            }
            Err(error) => {
                let message_data = &json!({ "meal_id": meal_id.trim(), "error": error.to_string() });
                log::error!("{}", self.resource_service.render("loading_recipe_failed_error_message_template", message_data));
                FetchOutcome::Failed(error)
            }
        };
        Ok(outcome)
    }

    /// Lossy lookup: anything but a decoded recipe becomes `Recipe::sentinel()`.
    pub async fn lookup_by_id_or_sentinel(&self, meal_id: &str) -> Result<Recipe, MealDbError> {
        Ok(self.lookup_by_id(meal_id).await?.unwrap_or_else(Recipe::sentinel))
    }

    fn endpoint_url(&self, path: &str, key: &str, value: &str) -> Result<Url, MealDbError> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&endpoint).map_err(|error| MealDbError::InvalidRequest(format!("{}: {}", endpoint, error)))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, MealDbError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MealDbError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::api::test_support::{ self, StubResponse };
    use crate::api::ResourceServiceFactory;

    fn recipe_service(base_url: &str) -> RecipeService {
        let settings = MealDbSettings {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            ..MealDbSettings::default()
        };
        let client = Client::builder().timeout(settings.request_timeout).build().unwrap();
        RecipeService::new(ResourceServiceFactory::bundled(), client, &settings)
    }

    const LOOKUP_BODY: &str = r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole","strDrinkAlternate":null,"strCategory":"Chicken","strArea":"Japanese","strInstructions":"Preheat oven.\r\nCombine.","strMealThumb":"https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg","strTags":"Meat,Casserole","strYoutube":"https://www.youtube.com/watch?v=4aZr5hZXP_s","strIngredient1":"soy sauce","strMeasure1":"3/4 cup","strIngredient2":"","strMeasure2":"","strIngredient3":"brown sugar","strMeasure3":"1/2 cup ","strSource":null}]}"#;

    #[test]
    fn builds_query_urls_under_the_base() {
        let recipe_service = recipe_service("https://themealdb.com/api/json/v1/1/");
        assert_eq!(
            recipe_service.category_listing_url(MealCategory::Dessert).unwrap().as_str(),
            "https://themealdb.com/api/json/v1/1/filter.php?c=Dessert"
        );
        assert_eq!(
            recipe_service.recipe_lookup_url(" 52772 ").unwrap().as_str(),
            "https://themealdb.com/api/json/v1/1/lookup.php?i=52772"
        );
        assert!(recipe_service.recipe_lookup_url("a&b").unwrap().as_str().ends_with("lookup.php?i=a%26b"));
    }

    #[test]
    fn blank_ids_and_bad_bases_are_invalid_requests() {
        assert!(matches!(recipe_service("https://themealdb.com").recipe_lookup_url("  "), Err(MealDbError::InvalidRequest(_))));
        assert!(matches!(recipe_service("not a url").category_listing_url(MealCategory::Beef), Err(MealDbError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn unreachable_host_lists_nothing_and_looks_up_the_sentinel() {
        let recipe_service = recipe_service(test_support::UNREACHABLE_BASE_URL);
        assert!(matches!(recipe_service.list_by_category(MealCategory::Beef).await, Ok(FetchOutcome::Failed(_))));
        assert!(recipe_service.list_by_category_or_empty(MealCategory::Beef).await.unwrap().is_empty());
        assert!(matches!(recipe_service.lookup_by_id("52772").await, Ok(FetchOutcome::Failed(_))));
        let sentinel = recipe_service.lookup_by_id_or_sentinel("52772").await.unwrap();
        assert_eq!(sentinel.name, "error");
        assert_eq!(sentinel.thumbnail_url, "https://www.themealdb.com/images/category/dessert.png");
    }

    #[tokio::test]
    async fn empty_category_is_distinct_from_a_failure() {
        let upstream = test_support::spawn_stub(StubResponse::json(200, r#"{"meals":null}"#)).await;
        let recipe_service = recipe_service(&upstream.base_url());
        assert!(matches!(recipe_service.list_by_category(MealCategory::Goat).await, Ok(FetchOutcome::Empty)));
        assert_eq!(upstream.request_lines(), vec!["GET /filter.php?c=Goat HTTP/1.1".to_string()]);
    }

    #[tokio::test]
    async fn lists_meals_in_upstream_order() {
        let body = r#"{"meals":[{"strMeal":"Tart","strMealThumb":"https://img/t.jpg","idMeal":"2"},{"strMeal":"Apam balik","strMealThumb":"https://img/a.jpg","idMeal":"1"}]}"#;
        let upstream = test_support::spawn_stub(StubResponse::json(200, body)).await;
        let meals = recipe_service(&upstream.base_url()).list_by_category_or_empty(MealCategory::Dessert).await.unwrap();
        assert_eq!(meals.iter().map(|meal| meal.id.as_str()).collect::<Vec<_>>(), vec!["2", "1"]);
    }

    #[tokio::test]
    async fn malformed_listing_is_a_failure() {
        let upstream = test_support::spawn_stub(StubResponse::json(200, r#"{"meals":[{"strMeal":"Tart","idMeal":"2"}]}"#)).await;
        let recipe_service = recipe_service(&upstream.base_url());
        match recipe_service.list_by_category(MealCategory::Dessert).await {
            Ok(FetchOutcome::Failed(MealDbError::MissingField(field))) => assert_eq!(field, "strMealThumb"),
            other => panic!("expected a decode failure, got {:?}", other)
        }
    }

    #[tokio::test]
    async fn looks_up_and_decodes_a_recipe() {
        let upstream = test_support::spawn_stub(StubResponse::json(200, LOOKUP_BODY)).await;
        let recipe = recipe_service(&upstream.base_url()).lookup_by_id("52772").await.unwrap().found().unwrap();
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.instructions, "Preheat oven.\n\nCombine.");
        assert_eq!(recipe.ingredients, vec!["3/4 cup soy sauce", "1/2 cup brown sugar"]);
        assert_eq!(upstream.request_lines(), vec!["GET /lookup.php?i=52772 HTTP/1.1".to_string()]);
    }

    #[tokio::test]
    async fn unknown_id_is_empty_or_sentinel() {
        let upstream = test_support::spawn_stub(StubResponse::json(200, r#"{"meals":null}"#)).await;
        let recipe_service = recipe_service(&upstream.base_url());
        assert!(matches!(recipe_service.lookup_by_id("1").await, Ok(FetchOutcome::Empty)));
        assert!(recipe_service.lookup_by_id_or_sentinel("1").await.unwrap().is_sentinel());
    }

    #[tokio::test]
    async fn error_status_is_a_failure() {
        let upstream = test_support::spawn_stub(StubResponse::json(500, "oops")).await;
        let recipe_service = recipe_service(&upstream.base_url());
        assert!(matches!(recipe_service.lookup_by_id("1").await, Ok(FetchOutcome::Failed(MealDbError::Status(500)))));
    }
}
