//! `MockProvider` — a test double for `TextProvider`.
//!
//! Records every fetch so tests can assert on transport call counts,
//! and supports a gated behaviour that parks the call until the test
//! releases it (used to hold a refresh cycle in flight).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{TextProvider, TransportError};

/// Behaviour injected into `MockProvider` at construction time.
pub enum MockBehaviour {
    /// Return the given text immediately.
    ReturnText(String),
    /// Wait until the paired `Notify` fires, then return the text.
    ReturnTextGated(String, Arc<Notify>),
    /// Fail with `Unauthorized`.
    FailUnauthorized,
    /// Fail with a generic transport error.
    FailOther(String),
}

pub struct MockProvider {
    pub behaviour: MockBehaviour,
    calls: AtomicUsize,
}

impl MockProvider {
    /// A provider that always answers with `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            behaviour: MockBehaviour::ReturnText(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose answer is withheld until the returned `Notify`
    /// is fired (via `notify_one`).
    pub fn gated(text: impl Into<String>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let provider = Self {
            behaviour: MockBehaviour::ReturnTextGated(text.into(), Arc::clone(&gate)),
            calls: AtomicUsize::new(0),
        };
        (provider, gate)
    }

    /// A provider that always fails with `Unauthorized`.
    pub fn failing_unauthorized() -> Self {
        Self {
            behaviour: MockBehaviour::FailUnauthorized,
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that always fails with a generic error.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            behaviour: MockBehaviour::FailOther(msg.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch_raw_text` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    async fn fetch_raw_text(&self) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behaviour {
            MockBehaviour::ReturnText(text) => Ok(text.clone()),
            MockBehaviour::ReturnTextGated(text, gate) => {
                gate.notified().await;
                Ok(text.clone())
            }
            MockBehaviour::FailUnauthorized => Err(TransportError::Unauthorized),
            MockBehaviour::FailOther(msg) => Err(TransportError::Other(msg.clone())),
        }
    }
}
