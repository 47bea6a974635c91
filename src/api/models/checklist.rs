use uuid::Uuid;
use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Checklist {
    pub id: Uuid,
    #[serde(rename  = "mealId")]
    pub meal_id: String,
    pub checked: Vec<bool>
}

impl Checklist {
    pub fn new(meal_id: String, number_of_ingredients: usize) -> Self {
        Checklist {
            id: Uuid::new_v4(),
            meal_id,
            checked: vec![false; number_of_ingredients]
        }
    }

    pub fn index_is_valid(&self, index: usize) -> bool {
        index < self.checked.len()
    }
}
