use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::stores::Keyed;

use super::date_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub amount: f64,
    #[serde(with = "date_string")]
    pub date: Date,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, date: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            category: "General".to_string(),
            amount,
            date,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Keyed for Expense {
    fn key(&self) -> Uuid {
        self.id
    }
}
