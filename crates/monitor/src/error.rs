//! Monitor-level error types.

use thiserror::Error;

/// The raw text did not contain two well-formed numeric candidates.
///
/// Carries the full diagnostic context — the raw text, how many
/// candidates were found, and the matched substrings — so upstream
/// format drift can be debugged from the error alone.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Fewer than two qualifying numeric tokens were found.
    #[error("expected 2 numeric candidates, found {found} (matched: {matched:?})")]
    TooFewCandidates {
        raw_text: String,
        found: usize,
        matched: Vec<String>,
    },

    /// A selected candidate did not parse to a finite number.
    #[error("candidate {candidate:?} is not a finite number ({found} candidates: {matched:?})")]
    NonFinite {
        raw_text: String,
        candidate: String,
        found: usize,
        matched: Vec<String>,
    },
}

/// An assembled value was non-finite.
///
/// Defensive only — a successful extraction already guarantees both
/// values are finite, so this should be unreachable in practice.
#[derive(Debug, Error)]
#[error("assembled value for '{field}' is not finite: {value}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
}

/// Umbrella error surfaced by the refresh orchestrator.
///
/// Every underlying kind propagates unchanged; nothing is retried here.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("transport error: {0}")]
    Transport(#[from] provider::TransportError),

    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] store::StoreError),
}
