//! `store` crate — the persistence boundary.
//!
//! Water level records live in a hosted append-only table reached over
//! PostgREST.  This crate provides the persisted record shape, the
//! [`RecordStore`] trait, the Supabase-backed implementation, and the
//! [`Store`] capability wrapper that degrades gracefully when no
//! credentials are configured.

pub mod error;
pub mod models;
pub mod traits;
pub mod supabase;
pub mod mock;

pub use error::StoreError;
pub use models::{Trend, WaterRecord};
pub use supabase::{SupabaseConfig, SupabaseStore};
pub use traits::{RecordStore, Store};
