use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stores::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: Uuid,
    pub title: String,
    pub category: Option<String>,
    pub done: bool,
}

impl TaskItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            category: None,
            done: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}

impl Keyed for TaskItem {
    fn key(&self) -> Uuid {
        self.id
    }
}
