use std::collections::{ HashMap, VecDeque };
use std::sync::{ PoisonError, RwLock };
use uuid::Uuid;
use crate::api::models::Checklist;

pub const UNKNOWN_CHECKLIST_ERROR: &str = "Unknown checklist";
pub const INVALID_INGREDIENT_INDEX_ERROR: &str = "Invalid ingredient index";
pub const DEFAULT_MAX_CHECKLISTS: usize = 1024;

struct Checklists {
    by_id: HashMap<Uuid, Checklist>,
    // Oldest first; drives eviction once max_checklists is reached
    creation_order: VecDeque<Uuid>
}

/// Ingredient check-off state for each opened recipe detail view. A checklist
/// lives until its view is dismissed, or until it is the oldest one when the cap is hit.
pub struct ChecklistService {
    max_checklists: usize,
    checklists: RwLock<Checklists>
}

impl Default for ChecklistService {
    fn default() -> Self {
        ChecklistService::new()
    }
}

impl ChecklistService {
    pub fn new() -> ChecklistService {
        ChecklistService::with_max_checklists(DEFAULT_MAX_CHECKLISTS)
    }

    pub fn with_max_checklists(max_checklists: usize) -> ChecklistService {
        ChecklistService {
            max_checklists: max_checklists.max(1),
            checklists: RwLock::new(Checklists { by_id: HashMap::new(), creation_order: VecDeque::new() })
        }
    }

    pub fn create(&self, meal_id: &str, number_of_ingredients: usize) -> Checklist {
        let checklist = Checklist::new(meal_id.to_string(), number_of_ingredients);
        let mut checklists = self.checklists.write().unwrap_or_else(PoisonError::into_inner);
        while checklists.by_id.len() >= self.max_checklists {
            match checklists.creation_order.pop_front() {
                Some(oldest_id) => {
                    checklists.by_id.remove(&oldest_id);
                    log::debug!("Dropped checklist {} to stay under {} checklists", oldest_id, self.max_checklists);
                }
                None => break
            }
        }
        checklists.creation_order.push_back(checklist.id);
        checklists.by_id.insert(checklist.id, checklist.clone());
        checklist
    }

    pub fn get(&self, id: Uuid) -> Option<Checklist> {
        self.checklists.read().unwrap_or_else(PoisonError::into_inner).by_id.get(&id).cloned()
    }

    pub fn toggle(&self, id: Uuid, index: usize) -> Result<Checklist, &'static str> {
        let mut checklists = self.checklists.write().unwrap_or_else(PoisonError::into_inner);
        let checklist = checklists.by_id.get_mut(&id).ok_or(UNKNOWN_CHECKLIST_ERROR)?;
        if !checklist.index_is_valid(index) {
            return Err(INVALID_INGREDIENT_INDEX_ERROR);
        }
        checklist.checked[index] = !checklist.checked[index];
        Ok(checklist.clone())
    }

    /// Called when the detail view is dismissed.
    pub fn remove(&self, id: Uuid) -> Option<Checklist> {
        let mut checklists = self.checklists.write().unwrap_or_else(PoisonError::into_inner);
        let removed = checklists.by_id.remove(&id)?;
        checklists.creation_order.retain(|existing_id| *existing_id != id);
        Some(removed)
    }
}
