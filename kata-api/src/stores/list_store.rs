//! Shared in-memory collections, one per entity kind.
//!
//! Every collection lives behind a single `RwLock` so concurrent handlers
//! serialize their read-modify-write sequences per collection. Nothing here
//! survives a process restart.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Records stored in a [`ListStore`] expose their generated id.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

pub struct ListStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Keyed + Clone> ListStore<T> {
    /// Append a record and hand it back, id included.
    pub async fn add(&self, record: T) -> T {
        let mut records = self.records.write().await;
        records.push(record.clone());
        record
    }

    /// Remove the record with the given id. Unknown ids are a no-op.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.key() != id);
        records.len() < before
    }

    /// Apply `mutate` to the record with the given id. Unknown ids are a no-op.
    pub async fn update<F>(&self, id: Uuid, mutate: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.key() == id) {
            Some(record) => {
                mutate(record);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the collection in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
