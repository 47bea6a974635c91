use std::collections::HashMap;
use uuid::Uuid;
use serde::Serialize;
use crate::api::models::Recipe;

/// Everything the detail screen needs after its lookup and video probe resolve.
#[derive(Serialize, Clone, Debug)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    #[serde(rename  = "isVideoAvailable")]
    pub is_video_available: bool,
    #[serde(rename  = "checklistId")]
    pub checklist_id: Uuid,
    pub labels: HashMap<String, String>
}
