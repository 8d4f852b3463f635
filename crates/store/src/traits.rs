//! The `RecordStore` trait and the optional-capability `Store` wrapper.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::{StoreError, WaterRecord};

/// The minimal read/write contract against the record table.
///
/// The monitor crate only ever talks to the store through this trait so
/// tests can substitute a recording mock.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, ascending by `created_at`.
    async fn list_all(&self) -> Result<Vec<WaterRecord>, StoreError>;

    /// Most recent record by `created_at`, if any exist.
    async fn latest(&self) -> Result<Option<WaterRecord>, StoreError>;

    /// Append one record.  `id`/`created_at` are assigned by the store.
    async fn insert(&self, record: &WaterRecord) -> Result<(), StoreError>;
}

/// The store capability as seen by the rest of the application.
///
/// Credentials may be entirely absent in a fresh deployment; instead of
/// null-checks scattered through call sites, `Unconfigured` behaves as
/// an empty, read-only collaborator: reads succeed with nothing, writes
/// fail with [`StoreError::NotConfigured`].
#[derive(Clone)]
pub enum Store {
    Configured(Arc<dyn RecordStore>),
    Unconfigured,
}

impl Store {
    pub async fn list_all(&self) -> Result<Vec<WaterRecord>, StoreError> {
        match self {
            Self::Configured(inner) => inner.list_all().await,
            Self::Unconfigured => {
                warn!("store not configured — returning empty history");
                Ok(Vec::new())
            }
        }
    }

    pub async fn latest(&self) -> Result<Option<WaterRecord>, StoreError> {
        match self {
            Self::Configured(inner) => inner.latest().await,
            Self::Unconfigured => Ok(None),
        }
    }

    pub async fn insert(&self, record: &WaterRecord) -> Result<(), StoreError> {
        match self {
            Self::Configured(inner) => inner.insert(record).await,
            Self::Unconfigured => Err(StoreError::NotConfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured(_) => write!(f, "Store::Configured"),
            Self::Unconfigured => write!(f, "Store::Unconfigured"),
        }
    }
}
