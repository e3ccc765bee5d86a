use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::stores::Keyed;

use super::date_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "date_string")]
    pub date: Date,
    pub location: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, date: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Keyed for CalendarEvent {
    fn key(&self) -> Uuid {
        self.id
    }
}
