use std::collections::HashMap;
use rocket::http::ContentType;
use rocket::response::status::NoContent;
use rocket::serde::json::Json;
use rocket::{ Build, Rocket, State };
use serde_json::json;
use uuid::Uuid;
use crate::api::models::{ self, Checklist, FetchOutcome, InputError, MealCategory, MealDbError, MealDbSettings, MealSummary, RecipeDetail };
use crate::api::{ ChecklistService, ImageCacheService, RecipeService, RecipeServiceFactory, ResourceService, VideoProbeService };

#[derive(Responder, Debug)]
pub enum RouteError {
    #[response(status = 400)]
    BadRequest(Json<InputError>),
    #[response(status = 404)]
    NotFound(Json<InputError>),
    #[response(status = 502)]
    BadGateway(Json<InputError>)
}

impl RouteError {
    fn bad_request<S: Into<String>>(message: S) -> Self {
        RouteError::BadRequest(Json(InputError::new(message)))
    }

    fn not_found<S: Into<String>>(message: S) -> Self {
        RouteError::NotFound(Json(InputError::new(message)))
    }

    fn bad_gateway<S: Into<String>>(message: S) -> Self {
        RouteError::BadGateway(Json(InputError::new(message)))
    }
}

#[get("/categories")]
fn categories_get() -> Json<Vec<&'static str>> {
    Json(MealCategory::ALL.iter().map(|category| category.name()).collect())
}

#[get("/categories/<category>/meals?<search>")]
async fn category_meals_get(
    recipe_service: &State<RecipeService>,
    resource_service: &State<ResourceService>,
    category: &str,
    search: Option<&str>
) -> Result<Json<Vec<MealSummary>>, RouteError> {
    let category = category.parse::<MealCategory>().map_err(RouteError::bad_request)?;
    match recipe_service.list_by_category(category).await {
        Ok(FetchOutcome::Found(meals)) => Ok(Json(models::filter_meal_summaries(meals, search))),
        Ok(FetchOutcome::Empty) => Ok(Json(vec![])),
        Ok(FetchOutcome::Failed(_)) => Err(RouteError::bad_gateway(resource_service.string("meals_fetch_failed_message"))),
        Err(error) => Err(RouteError::bad_request(error.to_string()))
    }
}

#[get("/meals/<meal_id>")]
async fn meal_get(
    recipe_service: &State<RecipeService>,
    video_probe_service: &State<VideoProbeService>,
    checklist_service: &State<ChecklistService>,
    resource_service: &State<ResourceService>,
    meal_id: &str
) -> Result<Json<RecipeDetail>, RouteError> {
    let recipe = match recipe_service.lookup_by_id(meal_id).await {
        Ok(FetchOutcome::Found(recipe)) => recipe,
        Ok(FetchOutcome::Empty) => return Err(RouteError::not_found(resource_service.string("recipe_not_found_message"))),
        Ok(FetchOutcome::Failed(_)) => return Err(RouteError::bad_gateway(resource_service.string("recipe_fetch_failed_message"))),
        Err(error) => return Err(RouteError::bad_request(error.to_string()))
    };
    // The probe depends on the decoded video url, so it runs after the lookup
    let is_video_available = match &recipe.video_url {
        Some(video_url) => video_probe_service.is_available(video_url).await,
        None => false
    };
    let checklist = checklist_service.create(&recipe.id, recipe.ingredients.len());
    Ok(Json(RecipeDetail {
        recipe,
        is_video_available,
        checklist_id: checklist.id,
        labels: detail_labels(resource_service)
    }))
}

#[get("/images?<url>")]
async fn image_get(
    image_cache_service: &State<ImageCacheService>,
    resource_service: &State<ResourceService>,
    settings: &State<MealDbSettings>,
    url: &str
) -> Result<(ContentType, Vec<u8>), RouteError> {
    if !settings.image_url_is_allowed(url) {
        let message_data = &json!({ "url": url, "host": settings.image_host });
        log::warn!("{}", resource_service.render("image_url_rejected_warn_message_template", message_data));
        return Err(RouteError::bad_request(resource_service.string("image_url_not_allowed_message")));
    }
    match image_cache_service.load(url).await {
        Ok(cached_image) => {
            let content_type = cached_image.content_type
                .as_deref()
                .and_then(ContentType::parse_flexible)
                .unwrap_or(ContentType::Binary);
            Ok((content_type, cached_image.bytes))
        }
        Err(MealDbError::InvalidRequest(message)) => Err(RouteError::bad_request(message)),
        Err(error) => Err(RouteError::bad_gateway(error.to_string()))
    }
}

#[get("/checklists/<id>")]
fn checklist_get(checklist_service: &State<ChecklistService>, id: &str) -> Result<Json<Checklist>, RouteError> {
    let id = parse_checklist_id(id)?;
    match checklist_service.get(id) {
        Some(checklist) => Ok(Json(checklist)),
        None => Err(RouteError::not_found(crate::api::UNKNOWN_CHECKLIST_ERROR))
    }
}

#[post("/checklists/<id>/<index>")]
fn checklist_toggle_post(checklist_service: &State<ChecklistService>, id: &str, index: usize) -> Result<Json<Checklist>, RouteError> {
    let id = parse_checklist_id(id)?;
    match checklist_service.toggle(id, index) {
        Ok(checklist) => Ok(Json(checklist)),
        Err(crate::api::UNKNOWN_CHECKLIST_ERROR) => Err(RouteError::not_found(crate::api::UNKNOWN_CHECKLIST_ERROR)),
        Err(error) => Err(RouteError::bad_request(error))
    }
}

#[delete("/checklists/<id>")]
fn checklist_delete(checklist_service: &State<ChecklistService>, id: &str) -> Result<NoContent, RouteError> {
    let id = parse_checklist_id(id)?;
    match checklist_service.remove(id) {
        Some(_) => Ok(NoContent),
        None => Err(RouteError::not_found(crate::api::UNKNOWN_CHECKLIST_ERROR))
    }
}

fn parse_checklist_id(id: &str) -> Result<Uuid, RouteError> {
    Uuid::parse_str(id).map_err(|error| RouteError::bad_request(format!("Couldn't parse checklist id: {}", error)))
}

fn detail_labels(resource_service: &ResourceService) -> HashMap<String, String> {
    [
        ("ingredients", "ingredients_label"),
        ("instructions", "instructions_label"),
        ("watchVideo", "watch_video_label")
    ]
    .iter()
    .map(|(key, name)| (key.to_string(), resource_service.string(name)))
    .collect()
}

pub fn build_rocket(resource_service: ResourceService, settings: &MealDbSettings) -> Rocket<Build> {
    let (recipe_service, video_probe_service, image_cache_service) = RecipeServiceFactory::create_or_panic(resource_service.clone(), settings);
    rocket::build()
        .mount("/", routes![categories_get, category_meals_get, meal_get, image_get, checklist_get, checklist_toggle_post, checklist_delete])
        .manage(recipe_service)
        .manage(video_probe_service)
        .manage(image_cache_service)
        .manage(ChecklistService::new())
        .manage(resource_service)
        .manage(settings.clone())
}
