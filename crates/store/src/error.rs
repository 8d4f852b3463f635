//! Typed error type for the store crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The table rejected the request on permission/policy grounds
    /// (HTTP 401/403 or PostgREST code `42501`).  Carries a remediation
    /// hint distinct from generic failures.
    #[error("store access denied: {hint}")]
    AccessDenied { hint: String },

    /// No store credentials were supplied; writes cannot proceed.
    #[error("store not configured: set SUPABASE_URL and SUPABASE_KEY to enable persistence")]
    NotConfigured,

    /// The store answered with a non-success status outside the
    /// access-denied family.
    #[error("store API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure talking to the store.
    #[error("store transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StoreError {
    pub(crate) fn access_denied() -> Self {
        Self::AccessDenied {
            hint: "grant a row-level security policy on the water_levels table \
                   (or disable RLS) and retry"
                .into(),
        }
    }
}
