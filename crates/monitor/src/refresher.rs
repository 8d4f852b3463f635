//! Refresh orchestration.
//!
//! `WaterMonitor` sequences one refresh cycle:
//! 1. Pull raw text from the configured [`TextProvider`].
//! 2. Extract the water level and 24-hour change.
//! 3. Classify the trend and assemble the record.
//! 4. Insert the record through the store boundary.
//! 5. Re-read the store to refresh the cached view state.
//!
//! Cycles are single-flight: an instance-owned `Mutex<()>` is acquired
//! with `try_lock` on entry, so an overlapping call returns immediately
//! as a no-op and the guard drop releases the gate on every exit path.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, instrument, warn};

use provider::TextProvider;
use store::{Store, WaterRecord};

use crate::error::MonitorError;
use crate::models::ViewState;
use crate::{assemble, extract, staleness};

/// What a `refresh` call did.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// A full cycle ran; the assembled record was persisted.
    Completed(WaterRecord),
    /// Another cycle was already in flight; nothing was done.
    AlreadyRunning,
}

/// The monitoring orchestrator.  One instance per process.
pub struct WaterMonitor {
    provider: Arc<dyn TextProvider>,
    store: Store,
    state: RwLock<ViewState>,
    /// Single-flight gate for refresh cycles.
    refresh_gate: Mutex<()>,
}

impl WaterMonitor {
    pub fn new(provider: Arc<dyn TextProvider>, store: Store) -> Self {
        Self {
            provider,
            store,
            state: RwLock::new(ViewState::default()),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Snapshot of the current view state for rendering.
    pub async fn view(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Initial load: populate the view from the store, then consult the
    /// staleness evaluator and fire-and-forget a refresh when the data
    /// is missing or older than 24 hours.  The spawned refresh does not
    /// block this call.
    pub async fn load_initial(self: &Arc<Self>) -> Result<(), MonitorError> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.last_error = None;
        }

        let result = self.reload_view().await;

        let mut state = self.state.write().await;
        state.loading = false;
        if let Err(e) = &result {
            state.last_error = Some(e.to_string());
        }
        let latest = state.latest.clone();
        drop(state);
        result?;

        if staleness::is_stale(latest.as_ref(), Utc::now()) {
            info!("no fresh record on startup — triggering refresh");
            let this = Arc::clone(self);
            tokio::spawn(async move {
                if let Err(e) = this.refresh().await {
                    warn!("startup refresh failed: {e}");
                }
            });
        }

        Ok(())
    }

    /// Run one refresh cycle, unless one is already in flight.
    ///
    /// A failure at any step aborts the remaining steps and surfaces
    /// the originating error; the failure message is retained in the
    /// view state until the next successful cycle, and previously
    /// loaded history/latest values are never cleared by a failure.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, MonitorError> {
        let Ok(_guard) = self.refresh_gate.try_lock() else {
            info!("refresh already in flight — skipping");
            return Ok(RefreshOutcome::AlreadyRunning);
        };

        {
            let mut state = self.state.write().await;
            state.updating = true;
            state.last_error = None;
        }

        let result = self.run_cycle().await;

        let mut state = self.state.write().await;
        state.updating = false;
        if let Err(e) = &result {
            error!("refresh cycle failed: {e}");
            state.last_error = Some(e.to_string());
        }
        drop(state);

        result.map(RefreshOutcome::Completed)
    }

    /// The cycle body: fetch → extract → assemble → persist → reload.
    async fn run_cycle(&self) -> Result<WaterRecord, MonitorError> {
        info!("fetching raw gauge text");
        let raw_text = self.provider.fetch_raw_text().await?;

        let reading = extract::extract(&raw_text)?;
        let record = assemble::assemble(&reading)?;
        info!(
            water_level = record.water_level,
            change_24h = record.change_24h,
            trend = %record.trend,
            "assembled water record"
        );

        self.store.insert(&record).await?;

        // The insert above is committed; a reload failure still fails
        // the cycle but is never rolled back (at-least-once).
        self.reload_view().await?;

        Ok(record)
    }

    /// Re-read history and latest from the store into the view state.
    async fn reload_view(&self) -> Result<(), MonitorError> {
        let history = self.store.list_all().await?;
        let latest = self.store.latest().await?;

        let mut state = self.state.write().await;
        state.history = history;
        state.latest = latest;
        Ok(())
    }
}
