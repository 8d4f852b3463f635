//! The `TextProvider` trait — the contract the refresh cycle pulls from.

use async_trait::async_trait;

use crate::TransportError;

/// A black-box source of free-form text describing the gauge page.
///
/// The monitor crate dispatches the fetch step through this trait so
/// tests can substitute a recording mock.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Fetch the rendered page text.  This is the only suspension point
    /// on the upstream side of a refresh cycle.
    async fn fetch_raw_text(&self) -> Result<String, TransportError>;
}
