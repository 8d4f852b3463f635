//! `monitor` crate — the gauge monitoring core.
//!
//! Turns the free-form text a bot scrapes off the gauge page into a
//! validated water level record and drives the
//! fetch → extract → assemble → persist → reload refresh cycle.

pub mod models;
pub mod error;
pub mod extract;
pub mod trend;
pub mod assemble;
pub mod staleness;
pub mod refresher;

pub use assemble::assemble;
pub use error::{ExtractError, MonitorError, ValidationError};
pub use extract::extract;
pub use models::{ExtractedReading, ViewState};
pub use refresher::{RefreshOutcome, WaterMonitor};
pub use staleness::is_stale;
pub use trend::classify;
