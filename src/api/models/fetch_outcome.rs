use crate::api::models::MealDbError;

/// What a request against the recipe service produced, once the request itself was valid.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Found(T),
    /// Upstream answered, but with no meals.
    Empty,
    Failed(MealDbError)
}

impl<T> FetchOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None
        }
    }

    /// Collapses `Empty` and `Failed` into the given fallback.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            FetchOutcome::Found(value) => value,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => fallback()
        }
    }
}
