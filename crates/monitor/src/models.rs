//! Core domain models for the monitoring cycle.
//!
//! The persisted record shape lives in the `store` crate; the types
//! here only exist in memory during a refresh cycle or for rendering.

use serde::Serialize;
use store::WaterRecord;

/// The two quantities pulled out of the raw gauge text.
///
/// Transient: produced by [`crate::extract`], consumed by
/// [`crate::assemble`], discarded after assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractedReading {
    /// Centimeters relative to the gauge station zero.
    pub water_level: f64,
    /// Signed change over the preceding 24 hours, in centimeters.
    pub change_24h: f64,
}

/// Snapshot of everything the rendering layer needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    /// Full history, ascending by `created_at`.
    pub history: Vec<WaterRecord>,
    /// Most recent record, if any.
    pub latest: Option<WaterRecord>,
    /// True while the initial load is running.
    pub loading: bool,
    /// True while a refresh cycle is in flight.
    pub updating: bool,
    /// Message of the last failed operation; retained until the next
    /// successful cycle so a failure never blanks the display.
    pub last_error: Option<String>,
}
