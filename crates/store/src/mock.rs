//! `MockStore` — a test double for `RecordStore`.
//!
//! Keeps records in memory and records every insert so tests can assert
//! on write counts (single-flight, failure paths, ...).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{RecordStore, StoreError, WaterRecord};

/// Behaviour injected into `MockStore` at construction time.
pub enum MockStoreBehaviour {
    /// Reads and writes succeed against the in-memory table.
    Normal,
    /// Every operation fails with `AccessDenied`.
    FailAccessDenied,
    /// Every operation fails with a generic API error.
    FailApi(String),
}

pub struct MockStore {
    pub behaviour: MockStoreBehaviour,
    /// The in-memory table, in insertion order.
    pub records: Arc<Mutex<Vec<WaterRecord>>>,
    /// Every record passed to `insert` (in call order), including
    /// inserts that were rejected.
    pub insert_calls: Arc<Mutex<Vec<WaterRecord>>>,
}

impl MockStore {
    /// An empty, well-behaved store.
    pub fn empty() -> Self {
        Self::seeded(Vec::new())
    }

    /// A well-behaved store pre-populated with `records` (treated as
    /// already ordered ascending by `created_at`).
    pub fn seeded(records: Vec<WaterRecord>) -> Self {
        Self {
            behaviour: MockStoreBehaviour::Normal,
            records: Arc::new(Mutex::new(records)),
            insert_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store that rejects everything with `AccessDenied`.
    pub fn denying() -> Self {
        Self {
            behaviour: MockStoreBehaviour::FailAccessDenied,
            records: Arc::new(Mutex::new(Vec::new())),
            insert_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.behaviour {
            MockStoreBehaviour::Normal => Ok(()),
            MockStoreBehaviour::FailAccessDenied => Err(StoreError::AccessDenied {
                hint: "mock denial".into(),
            }),
            MockStoreBehaviour::FailApi(msg) => Err(StoreError::Api {
                status: 500,
                message: msg.clone(),
            }),
        }
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn list_all(&self) -> Result<Vec<WaterRecord>, StoreError> {
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn latest(&self) -> Result<Option<WaterRecord>, StoreError> {
        self.check()?;
        Ok(self.records.lock().unwrap().last().cloned())
    }

    async fn insert(&self, record: &WaterRecord) -> Result<(), StoreError> {
        self.insert_calls.lock().unwrap().push(record.clone());
        self.check()?;

        // Mimic store-side assignment of id/created_at.
        let mut records = self.records.lock().unwrap();
        let mut stored = record.clone();
        stored.id = Some(records.len() as i64 + 1);
        stored.created_at = Some(chrono::Utc::now());
        records.push(stored);
        Ok(())
    }
}
