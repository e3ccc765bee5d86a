use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stores::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category: None,
            ingredients: None,
            instructions: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Case-insensitive substring match over title, category and ingredients.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .category
                .as_ref()
                .is_some_and(|category| category.to_lowercase().contains(&needle))
            || self
                .ingredients
                .as_ref()
                .is_some_and(|ingredients| ingredients.to_lowercase().contains(&needle))
    }
}

impl Keyed for Recipe {
    fn key(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_searches_ingredients_but_not_instructions() {
        let recipe = Recipe::new("Carbonara")
            .with_ingredients("Guanciale, eggs, pecorino")
            .with_instructions("Whisk the eggs with the cheese");

        assert!(recipe.matches("guanciale"));
        assert!(!recipe.matches("whisk"));
    }
}
