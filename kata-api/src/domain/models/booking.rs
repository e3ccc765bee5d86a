use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::stores::Keyed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub client: String,
    pub service: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(client: impl Into<String>, service: impl Into<String>, date: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            client: client.into(),
            service: service.into(),
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Keyed for Booking {
    fn key(&self) -> Uuid {
        self.id
    }
}
