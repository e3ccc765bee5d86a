use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stores::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category: None,
            content: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Case-insensitive substring match over title, category and content.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .category
                .as_ref()
                .is_some_and(|category| category.to_lowercase().contains(&needle))
            || self.content.to_lowercase().contains(&needle)
    }
}

impl Keyed for Note {
    fn key(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignores_case_across_fields() {
        let note = Note::new("Groceries")
            .with_category("Errands")
            .with_content("Milk and eggs");

        assert!(note.matches("grocer"));
        assert!(note.matches("ERRANDS"));
        assert!(note.matches("eggs"));
        assert!(!note.matches("laundry"));
    }

    #[test]
    fn matches_skips_missing_category() {
        let note = Note::new("Standalone");
        assert!(!note.matches("errands"));
    }
}
