use serde_json::{ Map, Value };
use crate::api::models::MealDbError;

pub type JsonObject = Map<String, Value>;

pub fn required_string(object: &JsonObject, key: &str) -> Result<String, MealDbError> {
    match object.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        _ => Err(MealDbError::MissingField(key.to_string()))
    }
}

/// Absent, null and non-string values all read as `None`.
pub fn optional_string(object: &JsonObject, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None
    }
}

/// Pulls the `meals` array out of an upstream envelope. `null` and `[]` are both empty.
pub fn meals_array(envelope: &Value) -> Result<Vec<JsonObject>, MealDbError> {
    let object = envelope.as_object().ok_or_else(|| MealDbError::MissingField("meals".to_string()))?;
    match object.get("meals") {
        Some(Value::Null) => Ok(vec![]),
        Some(Value::Array(meals)) => meals
            .iter()
            .map(|meal| meal.as_object().cloned().ok_or_else(|| MealDbError::MissingField("meals[]".to_string())))
            .collect(),
        _ => Err(MealDbError::MissingField("meals".to_string()))
    }
}
